//! `[author.contacts]` social handles.
//!
//! The platform set is closed. Each handle is an opaque display string
//! (username, URL or address); an empty string means the platform is not
//! shown.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported contact platforms, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPlatform {
    Email,
    Facebook,
    Telegram,
    Twitter,
    Github,
    Rss,
    Vkontakte,
    Linkedin,
    Instagram,
    Line,
    Gitlab,
    Weibo,
    Codepen,
    Youtube,
    Soundcloud,
}

impl ContactPlatform {
    pub const ALL: [Self; 15] = [
        Self::Email,
        Self::Facebook,
        Self::Telegram,
        Self::Twitter,
        Self::Github,
        Self::Rss,
        Self::Vkontakte,
        Self::Linkedin,
        Self::Instagram,
        Self::Line,
        Self::Gitlab,
        Self::Weibo,
        Self::Codepen,
        Self::Youtube,
        Self::Soundcloud,
    ];

    /// Key used in `[author.contacts]`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Facebook => "facebook",
            Self::Telegram => "telegram",
            Self::Twitter => "twitter",
            Self::Github => "github",
            Self::Rss => "rss",
            Self::Vkontakte => "vkontakte",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Line => "line",
            Self::Gitlab => "gitlab",
            Self::Weibo => "weibo",
            Self::Codepen => "codepen",
            Self::Youtube => "youtube",
            Self::Soundcloud => "soundcloud",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Comma-separated list of every key, for hints.
    pub fn known_keys() -> String {
        Self::ALL.map(Self::key).join(", ")
    }
}

impl fmt::Display for ContactPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Contact handles; leave a platform empty to hide it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "author.contacts")]
pub struct ContactsConfig {
    pub email: String,
    pub facebook: String,
    pub telegram: String,
    pub twitter: String,
    pub github: String,
    pub rss: String,
    pub vkontakte: String,
    pub linkedin: String,
    pub instagram: String,
    pub line: String,
    pub gitlab: String,
    pub weibo: String,
    pub codepen: String,
    pub youtube: String,
    pub soundcloud: String,
}

impl ContactsConfig {
    /// Handle for `platform`, `""` when absent.
    pub fn get(&self, platform: ContactPlatform) -> &str {
        match platform {
            ContactPlatform::Email => &self.email,
            ContactPlatform::Facebook => &self.facebook,
            ContactPlatform::Telegram => &self.telegram,
            ContactPlatform::Twitter => &self.twitter,
            ContactPlatform::Github => &self.github,
            ContactPlatform::Rss => &self.rss,
            ContactPlatform::Vkontakte => &self.vkontakte,
            ContactPlatform::Linkedin => &self.linkedin,
            ContactPlatform::Instagram => &self.instagram,
            ContactPlatform::Line => &self.line,
            ContactPlatform::Gitlab => &self.gitlab,
            ContactPlatform::Weibo => &self.weibo,
            ContactPlatform::Codepen => &self.codepen,
            ContactPlatform::Youtube => &self.youtube,
            ContactPlatform::Soundcloud => &self.soundcloud,
        }
    }

    /// Non-empty handles in platform order.
    pub fn present(&self) -> impl Iterator<Item = (ContactPlatform, &str)> {
        ContactPlatform::ALL
            .into_iter()
            .map(|p| (p, self.get(p)))
            .filter(|(_, handle)| !handle.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_contacts_default_to_empty() {
        let contacts: ContactsConfig =
            toml::from_str("twitter = \"hargwit\"\ngithub = \"hargwit\"").unwrap();

        assert_eq!(contacts.get(ContactPlatform::Twitter), "hargwit");
        assert_eq!(contacts.get(ContactPlatform::Github), "hargwit");
        for platform in ContactPlatform::ALL {
            if !matches!(platform, ContactPlatform::Twitter | ContactPlatform::Github) {
                assert_eq!(contacts.get(platform), "", "{platform} should be empty");
            }
        }
    }

    #[test]
    fn test_present_keeps_platform_order() {
        let contacts = ContactsConfig {
            linkedin: "hargwit".into(),
            twitter: "hargwit".into(),
            github: "hargwit".into(),
            ..Default::default()
        };
        let keys: Vec<_> = contacts.present().map(|(p, _)| p.key()).collect();
        assert_eq!(keys, ["twitter", "github", "linkedin"]);
    }

    #[test]
    fn test_key_round_trip() {
        for platform in ContactPlatform::ALL {
            assert_eq!(ContactPlatform::from_key(platform.key()), Some(platform));
        }
        assert_eq!(ContactPlatform::from_key("myspace"), None);
    }

    #[test]
    fn test_field_paths_match_keys() {
        assert_eq!(
            ContactsConfig::FIELDS.soundcloud.as_str(),
            "author.contacts.soundcloud"
        );
        let template = ContactsConfig::template();
        for platform in ContactPlatform::ALL {
            assert!(template.contains(&format!("{} = \"\"", platform.key())));
        }
    }

    #[test]
    fn test_handles_are_opaque() {
        // URLs, addresses and bare names are all accepted as-is
        let contacts: ContactsConfig = toml::from_str(
            "email = \"me@example.com\"\nrss = \"https://example.com/rss.xml\"\nline = \"@me\"",
        )
        .unwrap();
        assert_eq!(contacts.email, "me@example.com");
        assert_eq!(contacts.rss, "https://example.com/rss.xml");
        assert_eq!(contacts.line, "@me");
    }
}

//! Configuration section definitions.
//!
//! Each module corresponds to a table in `site.toml`:
//!
//! | Module     | TOML Section        | Purpose                          |
//! |------------|---------------------|----------------------------------|
//! | `menu`     | `[[menu]]`          | Navigation entries               |
//! | `author`   | `[author]`          | Author name, photo, bio          |
//! | `contacts` | `[author.contacts]` | Social handles                   |

mod author;
mod contacts;
mod menu;

pub use author::{ASSETS_DIR, AuthorConfig};
pub use contacts::{ContactPlatform, ContactsConfig};
pub use menu::MenuItem;

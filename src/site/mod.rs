//! Page-level collaborators of the terminal: section navigation,
//! the contact form, notifications and static copy.
//!
//! Nothing here knows about the screen; the TUI renders it.

pub mod contact;
pub mod content;
pub mod nav;
pub mod notification;

pub use contact::{ContactError, ContactForm, Field, SUCCESS_MESSAGE};
pub use content::{Project, ProjectLink, PROJECTS};
pub use nav::{NavMenu, PageLayout, Section, SectionSpan, HIGHLIGHT_OFFSET};
pub use notification::{Notification, NotificationKind, Notifier, NOTIFICATION_TTL};

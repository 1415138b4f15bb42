// Validation System
// Predicate trait plus the locale-record and full-name validators

pub mod fullname;
pub mod locale;
pub mod traits;

pub use fullname::{FullNameValidator, check_fullname};
pub use locale::{LocaleValidator, SUPPORTED_LOCALES, validate_locale};
pub use traits::{AcceptAll, Described, Validator};

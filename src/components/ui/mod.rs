mod alert;
mod badge;
mod button;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use badge::Badge;
pub(crate) use button::Button;
pub(crate) use spinner::Spinner;

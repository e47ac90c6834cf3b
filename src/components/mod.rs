//! UI Components
//!
//! Route screens and the pieces they are built from.

mod home;
mod login;
mod signup;
mod page_not_found;
mod todo_row;
mod toast_host;

pub use home::Home;
pub use login::Login;
pub use signup::Signup;
pub use page_not_found::PageNotFound;
pub use todo_row::TodoRow;
pub use toast_host::ToastHost;

mod result_set;
mod session;
mod view;

pub use result_set::ResultSet;
pub use session::Session;
pub use session::SessionController;
pub use view::UNKNOWN_CATEGORY_ID;
pub use view::ViewKind;

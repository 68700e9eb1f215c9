pub mod attachment_viewer;
pub mod field_error;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod status_badge;
pub mod toast;

pub use attachment_viewer::AttachmentViewer;
pub use field_error::FieldError;
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use pagination::{Pagination, PaginationData};
pub use protected_layout::{RequiresAdmin, RequiresLoggedIn};
pub use status_badge::{ParticipationBadge, TicketStatusBadge};
pub use toast::ToastContainer;

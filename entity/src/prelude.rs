pub use super::announcement::Entity as Announcement;
pub use super::event::Entity as Event;
pub use super::food::Entity as Food;
pub use super::outbox_job::Entity as OutboxJob;
pub use super::participation::Entity as Participation;
pub use super::stay::Entity as Stay;
pub use super::stay_booking::Entity as StayBooking;
pub use super::support_attachment::Entity as SupportAttachment;
pub use super::support_response::Entity as SupportResponse;
pub use super::support_response_attachment::Entity as SupportResponseAttachment;
pub use super::support_ticket::Entity as SupportTicket;
pub use super::team::Entity as Team;
pub use super::team_join_request::Entity as TeamJoinRequest;
pub use super::team_member::Entity as TeamMember;
pub use super::user::Entity as User;

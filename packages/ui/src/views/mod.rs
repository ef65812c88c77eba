mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod profile;
pub use profile::{ProfileCard, ProfileView};

mod guest_dashboard;
pub use guest_dashboard::GuestDashboard;

mod organizer_dashboard;
pub use organizer_dashboard::OrganizerDashboard;

mod dashboard;
pub use dashboard::{DashboardView, SessionProfileView};

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod app_layout;
pub use app_layout::AppLayout;

pub use ui::views::DashboardView as Dashboard;
pub use ui::views::SessionProfileView as Profile;

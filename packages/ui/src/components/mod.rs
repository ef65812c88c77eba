//! Small form building blocks shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label};

mod notice;
pub use notice::{Notice, NoticeKind};

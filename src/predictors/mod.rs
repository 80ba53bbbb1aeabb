pub mod constant;
pub mod delay_line;
pub mod transition;

pub use constant::ConstantPredictor;
pub use delay_line::DelayLinePredictor;
pub use transition::TransitionPredictor;

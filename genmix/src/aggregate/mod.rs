pub mod future;
pub mod past;
pub mod total;

pub mod util;

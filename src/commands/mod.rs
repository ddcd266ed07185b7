// Commands - handlers the application shell calls into

pub mod system;

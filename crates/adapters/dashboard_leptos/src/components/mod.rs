mod nav;

pub use nav::Nav;

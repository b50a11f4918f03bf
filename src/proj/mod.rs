mod albers;

pub use albers::AlbersUsa;

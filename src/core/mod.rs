pub mod board;
pub mod errors;
pub mod measure;
pub mod models;
pub mod timing;

pub use board::{ BoardEvent, CardBoard };
pub use errors::{ BoardError, CardBoardError };
pub use measure::{ ElementHandle, LayoutRegistry, Measure };
pub use models::{ BoundingBox, CardId, FlightState };

//! Session-scoped domain records and the closed value sets behind them.

pub mod catalog;
pub mod ids;
pub mod money;
pub mod order;
pub mod product;
pub mod role;
pub mod user;

pub use order::{Activity, DetailedOrder, OrderItem, OrderStatus, Tone, VendorInfo};
pub use product::{image_data_url, ImageError, Product};
pub use role::{AvailabilityType, BusinessCategory, Role, VehicleType};
pub use user::{RoleProfile, User};

pub mod entity;
pub mod user_info;

pub use entity::{Board, BoardEntity, BoardItem};
pub use user_info::{Avatar, UserInfo, UserInfoData};

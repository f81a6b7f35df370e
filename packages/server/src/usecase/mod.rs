//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod create_room;
pub mod disconnect_participant;
pub mod error;
pub mod join_room;
pub mod send_message;

pub use create_room::CreateRoomUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::{JoinRoomError, SendMessageError};
pub use join_room::JoinRoomUseCase;
pub use send_message::SendMessageUseCase;

//! Domain factories for creating domain entities and value objects.

use rand::{Rng, distr::Alphanumeric};

use super::{RoomId, value_object::ROOM_ID_LENGTH};

/// Factory for generating RoomId instances.
///
/// This factory encapsulates the logic for generating new room codes,
/// separating the generation concern from the validation logic in RoomId.
/// Uniqueness against existing rooms is the registry's job.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Generate a new RoomId of 8 characters, each drawn uniformly from `[A-Za-z0-9]`.
    ///
    /// # Panics
    ///
    /// Panics if the operating system's randomness source is unavailable.
    pub fn generate() -> RoomId {
        let code: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(ROOM_ID_LENGTH)
            .map(char::from)
            .collect();
        RoomId::from_generated(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_room_id_factory_generate() {
        // テスト項目: RoomIdFactory::generate() で 8 文字の英数字の RoomId を生成できる
        for _ in 0..1000 {
            // when (操作):
            let room_id = RoomIdFactory::generate();

            // then (期待する結果):
            let id_str = room_id.as_str();
            assert_eq!(id_str.len(), 8);
            assert!(id_str.chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(RoomId::new(id_str.to_string()).is_ok());
        }
    }

    #[test]
    fn test_room_id_factory_generate_uniqueness() {
        // テスト項目: RoomIdFactory::generate() は実用上毎回異なる ID を生成する
        // when (操作):
        let ids: HashSet<RoomId> = (0..1000).map(|_| RoomIdFactory::generate()).collect();

        // then (期待する結果):
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_room_id_factory_uses_whole_alphabet() {
        // テスト項目: 大文字・小文字・数字のすべてが出現する
        // when (操作):
        let chars: String = (0..500)
            .map(|_| RoomIdFactory::generate().into_string())
            .collect();

        // then (期待する結果):
        assert!(chars.chars().any(|c| c.is_ascii_uppercase()));
        assert!(chars.chars().any(|c| c.is_ascii_lowercase()));
        assert!(chars.chars().any(|c| c.is_ascii_digit()));
    }
}

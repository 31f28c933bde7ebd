//! Client-side identifiers for users and products.

use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

fn base36_id() -> String {
    encode_base36(Uuid::new_v4().as_u128())
}

/// The lowest nine base-36 digits of `value`, least significant first.
fn encode_base36(mut value: u128) -> String {
    let radix = BASE36.len() as u128;
    (0..ID_LEN)
        .map(|_| {
            let digit = (value % radix) as usize;
            value /= radix;
            BASE36[digit] as char
        })
        .collect()
}

/// Nine uppercase base-36 characters, assigned when registration finishes.
pub fn generate_user_id() -> String {
    base36_id().to_ascii_uppercase()
}

/// Nine lowercase base-36 characters for catalog entries.
pub fn generate_product_id() -> String {
    base36_id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ids_are_nine_uppercase_alphanumerics() {
        for _ in 0..32 {
            let id = generate_user_id();
            assert_eq!(id.len(), 9);
            assert!(id
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn product_ids_are_lowercase() {
        let id = generate_product_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn encoding_takes_low_digits_first() {
        assert_eq!(encode_base36(0), "000000000");
        assert_eq!(encode_base36(35), "z00000000");
        assert_eq!(encode_base36(36 + 2), "210000000");
        assert_eq!(encode_base36(u128::MAX).len(), 9);
    }

    #[test]
    fn every_position_varies() {
        let ids: Vec<Vec<char>> = (0..64)
            .map(|_| generate_product_id().chars().collect())
            .collect();
        for position in 0..9 {
            let first = ids[0][position];
            assert!(
                ids.iter().any(|id| id[position] != first),
                "position {position} never changed"
            );
        }
    }
}

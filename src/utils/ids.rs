// Identificadores de billete: 9 caracteres [0-9a-z] a partir de un UUID v4

use uuid::Uuid;

pub const TICKET_ID_LEN: usize = 9;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn generate_ticket_id() -> String {
    ticket_id_from(Uuid::new_v4())
}

/// Base 36 de los bits bajos del UUID, rellenado con ceros
pub fn ticket_id_from(uuid: Uuid) -> String {
    let mut value = uuid.as_u128();
    let mut id = Vec::with_capacity(TICKET_ID_LEN);
    for _ in 0..TICKET_ID_LEN {
        id.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    id.reverse();
    String::from_utf8(id).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_nine_base36_chars() {
        for _ in 0..50 {
            let id = generate_ticket_id();
            assert_eq!(id.len(), TICKET_ID_LEN);
            assert!(id.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn id_is_deterministic_for_a_uuid() {
        assert_eq!(ticket_id_from(Uuid::from_u128(0)), "000000000");
        assert_eq!(ticket_id_from(Uuid::from_u128(35)), "00000000z");
        assert_eq!(ticket_id_from(Uuid::from_u128(36)), "000000010");
    }
}

use subcrack_core::alphabet;
use subcrack_core::consts::{ALPHABET_LEN, SPACE_INDEX};
use subcrack_core::error::SubcrackError;

#[test]
fn alphabet_round_trips_every_symbol() {
    for i in 0..ALPHABET_LEN as u8 {
        let c = alphabet::char_of(i);
        assert_eq!(alphabet::symbol_of(c, 0).unwrap(), i);
    }
    assert_eq!(alphabet::char_of(SPACE_INDEX), ' ');
}

#[test]
fn encode_decode_round_trip() {
    let text = "attack at dawn";
    let seq = alphabet::encode(text).unwrap();
    assert_eq!(alphabet::decode(&seq), text);
}

#[test]
fn out_of_alphabet_symbols_are_rejected_with_position() {
    let err = alphabet::encode("abc!def").unwrap_err();
    match err {
        SubcrackError::InvalidSymbol { ch, position } => {
            assert_eq!(ch, '!');
            assert_eq!(position, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn uppercase_is_not_silently_remapped() {
    assert!(alphabet::encode("Abc").is_err());
}

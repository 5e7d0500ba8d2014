#![allow(missing_docs)]
use vigenere_core::alphabet::{NUMBERS_AND_SYMBOLS, STANDARD_BLOCKS};
use vigenere_core::{AlphabetConfig, AlphabetTable, DuplicatePolicy};

const STANDARD_ALPHABET: &str = "的一是了我不人在他有这个上们来到时大地为子中你说生国年就那和要她出也得里后自以会家可下而过天去能对小多然于心学之都好看起发工还あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをんㅂㅈㄷㄱㅅㅛㅕㅑㅐㅔабвгдеёжзийклмнопрстуфхцчшщъыьэюяґ😀😁😂🤣😃😄😅😆😉😊😋😎😍😘😗😙😚😜😝😛abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789?&@“$();:/-‘.,[]{}#%^*+=•¥£€><~|\\_ \n";

const KEEP_LAST_ALPHABET: &str = "的一是了我不人在他有这个上们来到时大地为子中你说生国年就那和要她出也得里后自以会家可下而过天去能对小多然于心学之都好看起发工还あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをんㅂㅈㄷㄱㅅㅛㅕㅑㅐㅔёъыэабвгґдежзийклмнопрстуфхцчшщьюя😀😁😂🤣😃😄😅😆😉😊😋😎😍😘😗😙😚😜😝😛abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789?&@“$();:‘.,-/[]{}#%^*+=•¥£€><~|\\_ \n";

fn keep_last_table() -> AlphabetTable {
    AlphabetConfig {
        duplicates: DuplicatePolicy::KeepLast,
        ..AlphabetConfig::standard()
    }
    .build()
    .unwrap()
}

#[test]
fn test_standard_alphabet_is_pinned() {
    let table = AlphabetTable::standard();
    assert_eq!(table.as_string(), STANDARD_ALPHABET);
    assert_eq!(table.len(), 271);
    assert_eq!(table.name(), "standard");
}

#[test]
fn test_standard_index_lookups() {
    let table = AlphabetTable::standard();
    assert_eq!(table.index_of('的'), Some(0));
    assert_eq!(table.index_of('ㅂ'), Some(109));
    assert_eq!(table.index_of('а'), Some(119));
    assert_eq!(table.index_of('я'), Some(151));
    assert_eq!(table.index_of('ґ'), Some(152));
    assert_eq!(table.index_of('😀'), Some(153));
    assert_eq!(table.index_of('a'), Some(173));
    assert_eq!(table.index_of('A'), Some(199));
    assert_eq!(table.index_of('Z'), Some(224));
    assert_eq!(table.index_of('0'), Some(225));
    assert_eq!(table.index_of('~'), Some(265));
    assert_eq!(table.index_of(' '), Some(269));
    assert_eq!(table.index_of('\n'), Some(270));
}

#[test]
fn test_excluded_characters() {
    let table = AlphabetTable::standard();
    for c in ['!', '\t', 'П', 'é', '"', '\''] {
        assert!(!table.contains(c), "{c:?} should not be in the alphabet");
    }
}

#[test]
fn test_maps_are_inverse() {
    for table in [AlphabetTable::standard().clone(), keep_last_table()] {
        for (i, &c) in table.symbols().iter().enumerate() {
            assert_eq!(table.index_of(c), Some(i));
            assert_eq!(table.char_at(i), Some(c));
        }
        assert_eq!(table.char_at(table.len()), None);
    }
}

#[test]
fn test_every_block_character_is_registered() {
    let table = AlphabetTable::standard();
    for (name, block) in STANDARD_BLOCKS {
        for c in block.chars() {
            assert!(table.contains(c), "{c:?} from block '{name}' is missing");
        }
    }
}

#[test]
fn test_symbols_block_registered_exactly_once() {
    let table = AlphabetTable::standard();
    for c in NUMBERS_AND_SYMBOLS.chars() {
        let occurrences = table.symbols().iter().filter(|&&s| s == c).count();
        assert_eq!(occurrences, 1, "{c:?} should appear exactly once");
    }
}

#[test]
fn test_korean_block_collapses_to_ten_jamo() {
    let table = AlphabetTable::standard();
    let jamo: String = table.symbols()[109..119].iter().collect();
    assert_eq!(jamo, "ㅂㅈㄷㄱㅅㅛㅕㅑㅐㅔ");
}

#[test]
fn test_keep_last_policy_is_pinned() {
    let table = keep_last_table();
    assert_eq!(table.as_string(), KEEP_LAST_ALPHABET);
    assert_eq!(table.len(), 271);
    assert_eq!(table.index_of('A'), Some(199));
    assert_eq!(table.index_of('а'), Some(123));
    assert_eq!(table.index_of('я'), Some(152));
    assert_eq!(table.index_of('ґ'), Some(127));
}

#[test]
fn test_fingerprint_tracks_ordering_and_passthrough() {
    let standard = AlphabetTable::standard();
    assert_eq!(standard.fingerprint().len(), 64);
    assert_ne!(standard.fingerprint(), keep_last_table().fingerprint());

    let no_passthrough = AlphabetConfig {
        passthrough: String::new(),
        ..AlphabetConfig::standard()
    }
    .build()
    .unwrap();
    assert_eq!(no_passthrough.as_string(), standard.as_string());
    assert_ne!(no_passthrough.fingerprint(), standard.fingerprint());
}

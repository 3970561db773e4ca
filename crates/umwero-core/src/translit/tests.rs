use proptest::prelude::*;

use crate::numeral::NumeralCodec;
use crate::registry::MappingRegistry;

use super::{Token, TokenKind, Transliterator};

fn translit() -> Transliterator<'static> {
    Transliterator::new(MappingRegistry::global(), NumeralCodec::default())
}

fn outputs(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.output.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Latin -> Umwero
// ---------------------------------------------------------------------------

#[test]
fn test_forward_vowel() {
    assert_eq!(translit().forward("A"), "\"");
    assert_eq!(translit().forward("a"), "\"");
}

#[test]
fn test_forward_nkw_is_one_cluster() {
    let tokens = translit().tokenize_forward("NKW");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].input, "NKW");
    assert_eq!(tokens[0].output, "k~");
    assert_eq!(tokens[0].kind, TokenKind::Consonant);
}

#[test]
fn test_forward_ligature_beats_two_vowels() {
    assert_eq!(translit().forward("AA"), "\u{E000}");
    assert_eq!(translit().forward("uu"), "\u{E004}");
    // Three vowels: ligature first, then the lone vowel.
    assert_eq!(translit().forward("AAA"), "\u{E000}\"");
}

#[test]
fn test_forward_words() {
    let t = translit();
    // m-u-r-a-h-o
    assert_eq!(t.forward("muraho"), "M:R\"H{");
    // i-n-k-a: NK is one cluster
    assert_eq!(t.forward("inka"), "}k\"");
    // u-mw-a-n-a
    assert_eq!(t.forward("umwana"), ":M~\"N\"");
    // i-nsh-u-ti
    assert_eq!(t.forward("inshuti"), "}@:T}");
    // i-nshy-a
    assert_eq!(t.forward("inshya"), "}@^\"");
}

#[test]
fn test_forward_l_and_r_collide() {
    assert_eq!(translit().forward("L"), translit().forward("R"));
}

#[test]
fn test_forward_numerals() {
    let t = translit();
    assert_eq!(t.forward("25"), "\u{F300}25");
    assert_eq!(t.forward("100"), "\u{F301}1");
    assert_eq!(t.forward("0"), "0");
    let tokens = t.tokenize_forward("imyaka 25");
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Numeral);
}

#[test]
fn test_forward_numeral_fallbacks() {
    let t = translit();
    assert_eq!(t.forward("007"), "007");
    let huge = "123456789012345678901234567890";
    assert_eq!(t.forward(huge), huge);

    let capped = Transliterator::new(MappingRegistry::global(), NumeralCodec::new(2));
    assert_eq!(capped.forward("999"), "\u{F301}9\u{F300}99");
    assert_eq!(capped.forward("1000"), "1000");
}

#[test]
fn test_forward_digits_split_from_letters() {
    let tokens = translit().tokenize_forward("a5b");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [TokenKind::Vowel, TokenKind::Numeral, TokenKind::Consonant]
    );
}

#[test]
fn test_forward_unmapped_passthrough() {
    let tokens = translit().tokenize_forward("qé:");
    assert_eq!(outputs(&tokens), ["Q", "é", ":"]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Unmapped));
}

#[test]
fn test_forward_non_ascii_is_not_case_expanded() {
    let t = translit();
    for s in ["ß", "\u{FB01}", "é", "ÉÇ"] {
        let tokens = t.tokenize_forward(s);
        assert_eq!(tokens.len(), s.chars().count(), "{s:?} was split or expanded");
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Unmapped));
        assert_eq!(t.forward(s), s);
    }
    // Mapped letters around an unmapped one are still converted.
    assert_eq!(t.forward("aßa"), "\"ß\"");
}

#[test]
fn test_forward_punctuation() {
    let tokens = translit().tokenize_forward("n'abana!");
    assert_eq!(tokens[1].kind, TokenKind::Punctuation);
    assert_eq!(tokens[1].output, "'");
    assert_eq!(tokens.last().unwrap().output, "!");
}

#[test]
fn test_forward_whitespace_policy() {
    let t = translit();
    assert_eq!(t.forward("  a \n a"), "  \" \n \"");
    let collapsed = t.with_collapse_whitespace(true);
    assert_eq!(collapsed.forward("  a \n a  "), "\" \"");
}

#[test]
fn test_longest_match_small_registry() {
    let toml = r#"
[vowels]
A = "a"

[ligatures]

[consonants]
N = "n"
K = "k"
W = "w"
NKW = "Q"
"#;
    let reg = MappingRegistry::from_toml(toml).unwrap();
    let t = Transliterator::new(&reg, NumeralCodec::default());
    let tokens = t.tokenize_forward("NKW");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].output, "Q");
    // Without the full cluster the scan falls back letter by letter.
    assert_eq!(t.forward("NKA"), "nka");
}

// ---------------------------------------------------------------------------
// Umwero -> Latin
// ---------------------------------------------------------------------------

#[test]
fn test_reverse_words() {
    let t = translit();
    assert_eq!(t.reverse("M:R\"H{"), "MURAHO");
    assert_eq!(t.reverse("}k\""), "INKA");
    assert_eq!(t.reverse("}@^\""), "INSHYA");
    assert_eq!(t.reverse("\u{E000}"), "AA");
}

#[test]
fn test_reverse_canonical_choice() {
    let t = translit();
    let tokens = t.tokenize_reverse("R");
    assert_eq!(tokens[0].output, "R");
    assert!(tokens[0].ambiguous);
    assert_eq!(t.reverse("C\""), "CYA");
    assert_eq!(t.reverse("C~\""), "CYWA");
    // forward(L) shares R's glyph, so L does not survive a round trip.
    assert_eq!(t.reverse(&t.forward("LETA")), "RETA");
}

#[test]
fn test_reverse_c_family_consistent() {
    let t = translit();
    // C, CY, CW and CYW all write with the C glyph; reverse always reads CY.
    assert_eq!(t.reverse(&t.forward("CA")), "CYA");
    assert_eq!(t.reverse(&t.forward("CYA")), "CYA");
    assert_eq!(t.reverse(&t.forward("CWA")), "CYWA");
    assert_eq!(t.reverse(&t.forward("CYWA")), "CYWA");
}

#[test]
fn test_reverse_is_deterministic() {
    let t = translit();
    let first = t.reverse("R~\" R^\" C~");
    for _ in 0..100 {
        assert_eq!(t.reverse("R~\" R^\" C~"), first);
    }
    assert_eq!(first, "RWA RYA CYW");
}

#[test]
fn test_reverse_canonical_independent_of_table_order() {
    let a = r#"
[vowels]
A = "a"
[ligatures]
[consonants]
L = "R"
R = "R"
"#;
    let b = r#"
[vowels]
A = "a"
[ligatures]
[consonants]
R = "R"
L = "R"
"#;
    let ra = MappingRegistry::from_toml(a).unwrap();
    let rb = MappingRegistry::from_toml(b).unwrap();
    let ta = Transliterator::new(&ra, NumeralCodec::default());
    let tb = Transliterator::new(&rb, NumeralCodec::default());
    assert_eq!(ta.reverse("RaR"), tb.reverse("RaR"));
    assert_eq!(ta.reverse("R"), "L");
}

#[test]
fn test_reverse_numerals() {
    let t = translit();
    assert_eq!(t.reverse("\u{F300}25"), "25");
    assert_eq!(t.reverse("\u{F301}1"), "100");
    assert_eq!(t.reverse("\"\u{F300}25"), "A25");
}

#[test]
fn test_reverse_adjacent_numerals() {
    let t = translit();
    let tokens = t.tokenize_reverse("\u{F300}25\u{F300}1");
    assert_eq!(outputs(&tokens), ["25", "10"]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Numeral));
    assert_eq!(t.reverse("12"), "12");
}

#[test]
fn test_reverse_malformed_numeral_kept() {
    let t = translit();
    let tokens = t.tokenize_reverse("\u{F300}");
    assert_eq!(tokens[0].kind, TokenKind::Unmapped);
    assert_eq!(tokens[0].output, "\u{F300}");
    assert_eq!(t.reverse("007"), "007");
}

#[test]
fn test_reverse_unmapped_passthrough() {
    let t = translit();
    assert_eq!(t.reverse("~Q?"), "~Q?");
    let tokens = t.tokenize_reverse("?");
    assert_eq!(tokens[0].kind, TokenKind::Punctuation);
}

#[test]
fn test_reverse_lowercase_output() {
    let t = translit().with_lowercase_output(true);
    assert_eq!(t.reverse("M:R\"H{ Q"), "muraho Q");
}

#[test]
fn test_roundtrip_unambiguous_text() {
    let t = translit();
    for word in ["MURAHO", "INKA", "UMWANA", "INSHUTI", "AMAZI", "IMPFIZI", "NYAGASANI"] {
        assert_eq!(t.reverse(&t.forward(word)), word, "roundtrip failed for {word}");
    }
}

#[test]
fn test_global_entry_points() {
    assert_eq!(super::transliterate_forward("inka"), "}k\"");
    assert_eq!(super::transliterate_reverse("}k\""), "INKA");
    assert_eq!(super::tokenize_forward("a").len(), 1);
    assert_eq!(super::tokenize_reverse("\"").len(), 1);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_latin_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => prop::sample::select(vec!['a', 'e', 'i', 'o', 'u']),
        4 => prop::sample::select(vec![
            'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's',
            't', 'v', 'w', 'y', 'z', 'q', 'x',
        ]),
        1 => prop::sample::select(vec!['0', '1', '2', '5', '9']),
        1 => prop::sample::select(vec![' ', '\n', '.', ',', '\'', '!', 'é', 'ß', '\u{FB01}']),
    ]
}

fn arb_passthrough_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        ' ', '.', ',', '!', '?', ';', '\'', '-', '(', ')', '/', '\n', '\t',
    ])
}

proptest! {
    #[test]
    fn prop_punctuation_is_idempotent(s in prop::collection::vec(arb_passthrough_char(), 0..40)) {
        let s: String = s.into_iter().collect();
        prop_assert_eq!(translit().forward(&s), s);
    }

    #[test]
    fn prop_forward_drops_nothing(s in prop::collection::vec(arb_latin_char(), 0..60)) {
        let s: String = s.into_iter().collect();
        let tokens = translit().tokenize_forward(&s);
        let consumed: String = tokens.iter().map(|t| t.input.as_str()).collect();
        prop_assert_eq!(consumed, s.to_ascii_uppercase());
        prop_assert!(tokens.iter().all(|t| !t.output.is_empty()));
    }

    #[test]
    fn prop_reverse_drops_nothing(s in prop::collection::vec(arb_latin_char(), 0..60)) {
        let s: String = s.into_iter().collect();
        let umwero = translit().forward(&s);
        let tokens = translit().tokenize_reverse(&umwero);
        let consumed: String = tokens.iter().map(|t| t.input.as_str()).collect();
        prop_assert_eq!(consumed, umwero);
        prop_assert!(tokens.iter().all(|t| !t.output.is_empty()));
    }

    #[test]
    fn prop_reverse_is_stable(s in prop::collection::vec(arb_latin_char(), 0..60)) {
        let s: String = s.into_iter().collect();
        let umwero = translit().forward(&s);
        let latin = translit().reverse(&umwero);
        // Canonical Latin maps to the same Umwero and back to itself.
        prop_assert_eq!(translit().forward(&latin), umwero.clone());
        prop_assert_eq!(translit().reverse(&umwero), latin);
    }

    #[test]
    fn prop_numeral_roundtrip(n in any::<u64>()) {
        let t = translit();
        prop_assert_eq!(t.reverse(&t.forward(&n.to_string())), n.to_string());
    }
}

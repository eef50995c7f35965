//! Static word and pattern tables backing Portuguese detection
//!
//! The word list is curated, not exhaustive: common function and content
//! words weighted toward what shows up in lesson text and learner chat.
//! Exact English homographs ("a", "as", "do", "no") are deliberately left
//! out so English prose doesn't accumulate spurious matches.

use std::sync::LazyLock;

use regex::Regex;

/// Common Brazilian-Portuguese function/content words for frequency scoring
pub(crate) const PORTUGUESE_WORDS: &[&str] = &[
    "o", "os", "um", "uma", "de", "da", "dos", "das", "em", "na", "nas", "para", "pra", "por",
    "pelo", "pela", "com", "sem", "sobre", "que", "não", "sim", "ou", "mas", "se", "como",
    "quando", "onde", "porque", "já", "ainda", "também", "muito", "muita", "bem", "mais", "menos",
    "todo", "toda", "tudo", "nada", "você", "vocês", "eu", "ele", "ela", "nós", "eles", "elas",
    "meu", "minha", "seu", "sua", "nosso", "nossa", "isso", "isto", "é", "são", "está", "estão",
    "estou", "ser", "estar", "ter", "tem", "foi", "fazer", "vou", "vai", "quero", "posso", "pode",
    "sei", "aqui", "hoje", "agora", "depois", "sempre", "nunca", "aula", "lição", "obrigado",
    "obrigada", "aprender", "falar", "português", "coisa", "dia",
];

/// Punctuation stripped from tokens before lexicon lookup
pub(crate) const TOKEN_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}', '«', '»', '¿', '¡',
];

/// High-signal Portuguese phrase patterns
///
/// Any single match classifies the text as Portuguese without consulting
/// the word-frequency score. Inputs are lowercased before matching.
pub(crate) static PHRASE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Polite expressions
        r"\b(?:por favor|obrigad[oa]|com licen[çc]a|desculpa|desculpe|de nada|tudo bem|bom dia|boa tarde|boa noite)\b",
        // Pronoun + verb pairs
        r"\b(?:eu|voc[eê]s?|n[oó]s|ele|ela)\s+(?:sou|estou|est[aá]|tenho|tem|quero|quer|queria|gosto|gosta|gostaria|preciso|precisa|posso|pode|vou|vai|falo|fala|moro|mora|aprendo|aprende|entendo|entende|sei|sabe|acho|acha)\b",
        r"\bme\s+(?:ajude|ajuda|ensine|ensina|explique|explica|diga|mostre|fale)\b",
        // Question-word-initiated questions
        r"^(?:o que|qual|quais|quem|quando|onde|como|por que|quantos?|quantas?)\b",
        // Possessive-pronoun phrases
        r"\b(?:meu|minha|meus|minhas|seu|sua|seus|suas|nosso|nossa|nossos|nossas)\s+\p{L}+",
        // Intensifier phrases
        r"\b(?:muito|muita|t[aã]o|bem)\s+(?:bom|boa|bonito|bonita|legal|obrigad[oa]|f[aá]cil|dif[ií]cil|interessante|importante|r[aá]pido|devagar)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// English pedagogical/technical terms that mark mixed-language lesson text
pub(crate) static ENGLISH_STUDY_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:present perfect|past simple|present continuous|simple present|past continuous|future tense|phrasal verbs?|irregular verbs?|verb tenses?|grammar|vocabulary|pronunciation|listening|speaking|reading|writing|spelling|quiz)\b",
    )
    .expect("valid regex")
});

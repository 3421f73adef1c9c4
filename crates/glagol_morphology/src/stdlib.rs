//! Standard lexicon for data-query sentences.
//!
//! Covers the words needed for queries like "покажи все организации из
//! минска": imperative verbs, entity nouns, a few adjectives, cardinal
//! numerals up to 999, prepositions with their governed cases, conjunctions,
//! particles, pronouns, and adverbs.
//!
//! Declaration order matters: it is the order readings come back in within a
//! part-of-speech group.

use glagol_foundation::{Animacy, Case, Gender, Number, PartOfSpeech, Person};

use crate::lexeme::Lexeme;
use crate::memory::MemoryLexicon;
use crate::paradigm::{
    ADJECTIVE_HARD, ADJECTIVE_STRESSED, ADJECTIVE_WHOLE, FEMININE_A, FEMININE_IA, MASCULINE_HARD,
    MASCULINE_VELAR, NEUTER_E, NEUTER_IE, NounDeclension, adjective, gendered_numeral, imperative_verb,
    invariable, noun, numeral, preposition, pronoun, singular_noun, soft_numeral,
};

/// Builds the standard lexicon.
#[must_use]
pub fn standard_lexicon() -> MemoryLexicon {
    let mut lexicon = MemoryLexicon::new();
    lexicon.register_all(verbs());
    lexicon.register_all(nouns());
    lexicon.register_all(adjectives());
    lexicon.register_all(numerals());
    lexicon.register_all(prepositions());
    lexicon.register_all(function_words());
    lexicon.register_all(pronouns());
    lexicon
}

fn verbs() -> Vec<Lexeme> {
    vec![
        imperative_verb("показать", "покажи", "покажите"),
        imperative_verb("вывести", "выведи", "выведите"),
        imperative_verb("найти", "найди", "найдите"),
        imperative_verb("отсортировать", "отсортируй", "отсортируйте"),
        imperative_verb("упорядочить", "упорядочи", "упорядочите"),
    ]
}

fn nouns() -> Vec<Lexeme> {
    use Animacy::{Animate, Inanimate};
    use Gender::{Feminine, Masculine, Neuter};

    vec![
        noun("организация", "организаци", Feminine, Inanimate, &FEMININE_IA),
        noun("компания", "компани", Feminine, Inanimate, &FEMININE_IA),
        noun("фирма", "фирм", Feminine, Inanimate, &FEMININE_A),
        noun("дата", "дат", Feminine, Inanimate, &FEMININE_A),
        noun("сумма", "сумм", Feminine, Inanimate, &FEMININE_A),
        noun("город", "город", Masculine, Inanimate, &MASCULINE_HARD),
        noun("отдел", "отдел", Masculine, Inanimate, &MASCULINE_HARD),
        noun("банк", "банк", Masculine, Inanimate, &MASCULINE_VELAR),
        noun("клиент", "клиент", Masculine, Animate, &MASCULINE_HARD),
        noun("сотрудник", "сотрудник", Masculine, Animate, &MASCULINE_VELAR),
        noun("поле", "пол", Neuter, Inanimate, &NEUTER_E),
        noun("название", "названи", Neuter, Inanimate, &NEUTER_IE),
        noun("значение", "значени", Neuter, Inanimate, &NEUTER_IE),
        singular_noun("минск", "минск", Masculine, Inanimate, &MASCULINE_HARD),
        singular_noun("пинск", "пинск", Masculine, Inanimate, &MASCULINE_HARD),
        singular_noun("брест", "брест", Masculine, Inanimate, &MASCULINE_HARD),
        singular_noun("гомель", "гомел", Masculine, Inanimate, &SOFT_PLACE),
    ]
}

/// Masculine soft stem, singular only: Гомель.
const SOFT_PLACE: NounDeclension = NounDeclension {
    singular: ["ь", "я", "ю", "ь", "ем", "е"],
    plural: ["и", "ей", "ям", "и", "ями", "ях"],
};

fn adjectives() -> Vec<Lexeme> {
    vec![
        adjective("весь", "", &ADJECTIVE_WHOLE),
        adjective("большой", "больш", &ADJECTIVE_STRESSED),
        adjective("новый", "нов", &ADJECTIVE_HARD),
        adjective("крупный", "крупн", &ADJECTIVE_HARD),
        adjective("активный", "активн", &ADJECTIVE_HARD),
    ]
}

fn numerals() -> Vec<Lexeme> {
    vec![
        gendered_numeral(
            1,
            ["один", "одного", "одному", "один", "одним", "одном"],
            ["одна", "одной", "одной", "одну", "одной", "одной"],
            ["одно", "одного", "одному", "одно", "одним", "одном"],
        ),
        gendered_numeral(
            2,
            ["два", "двух", "двум", "два", "двумя", "двух"],
            ["две", "двух", "двум", "две", "двумя", "двух"],
            ["два", "двух", "двум", "два", "двумя", "двух"],
        ),
        numeral(3, ["три", "трёх", "трём", "три", "тремя", "трёх"]),
        numeral(4, ["четыре", "четырёх", "четырём", "четыре", "четырьмя", "четырёх"]),
        soft_numeral("пять", 5),
        soft_numeral("шесть", 6),
        soft_numeral("семь", 7),
        numeral(8, ["восемь", "восьми", "восьми", "восемь", "восемью", "восьми"]),
        soft_numeral("девять", 9),
        soft_numeral("десять", 10),
        soft_numeral("одиннадцать", 11),
        soft_numeral("двенадцать", 12),
        soft_numeral("тринадцать", 13),
        soft_numeral("четырнадцать", 14),
        soft_numeral("пятнадцать", 15),
        soft_numeral("шестнадцать", 16),
        soft_numeral("семнадцать", 17),
        soft_numeral("восемнадцать", 18),
        soft_numeral("девятнадцать", 19),
        soft_numeral("двадцать", 20),
        soft_numeral("тридцать", 30),
        numeral(40, ["сорок", "сорока", "сорока", "сорок", "сорока", "сорока"]),
        numeral(
            50,
            ["пятьдесят", "пятидесяти", "пятидесяти", "пятьдесят", "пятьюдесятью", "пятидесяти"],
        ),
        numeral(
            60,
            ["шестьдесят", "шестидесяти", "шестидесяти", "шестьдесят", "шестьюдесятью", "шестидесяти"],
        ),
        numeral(
            70,
            ["семьдесят", "семидесяти", "семидесяти", "семьдесят", "семьюдесятью", "семидесяти"],
        ),
        numeral(
            80,
            ["восемьдесят", "восьмидесяти", "восьмидесяти", "восемьдесят", "восемьюдесятью", "восьмидесяти"],
        ),
        numeral(90, ["девяносто", "девяноста", "девяноста", "девяносто", "девяноста", "девяноста"]),
        numeral(100, ["сто", "ста", "ста", "сто", "ста", "ста"]),
        numeral(200, ["двести", "двухсот", "двумстам", "двести", "двумястами", "двухстах"]),
        numeral(300, ["триста", "трёхсот", "трёмстам", "триста", "тремястами", "трёхстах"]),
        numeral(
            400,
            ["четыреста", "четырёхсот", "четырёмстам", "четыреста", "четырьмястами", "четырёхстах"],
        ),
        numeral(500, ["пятьсот", "пятисот", "пятистам", "пятьсот", "пятьюстами", "пятистах"]),
        numeral(600, ["шестьсот", "шестисот", "шестистам", "шестьсот", "шестьюстами", "шестистах"]),
        numeral(700, ["семьсот", "семисот", "семистам", "семьсот", "семьюстами", "семистах"]),
        numeral(
            800,
            ["восемьсот", "восьмисот", "восьмистам", "восемьсот", "восемьюстами", "восьмистах"],
        ),
        numeral(
            900,
            ["девятьсот", "девятисот", "девятистам", "девятьсот", "девятьюстами", "девятистах"],
        ),
    ]
}

fn prepositions() -> Vec<Lexeme> {
    use Case::{Accusative, Dative, Genitive, Instrumental, Prepositional};

    vec![
        preposition("из", &[Genitive]),
        preposition("от", &[Genitive]),
        preposition("до", &[Genitive]),
        preposition("для", &[Genitive]),
        preposition("без", &[Genitive]),
        preposition("у", &[Genitive]),
        preposition("с", &[Genitive, Instrumental]),
        preposition("по", &[Dative]),
        preposition("к", &[Dative]),
        preposition("в", &[Accusative, Prepositional]),
        preposition("на", &[Accusative, Prepositional]),
        preposition("о", &[Prepositional]),
    ]
}

fn function_words() -> Vec<Lexeme> {
    vec![
        invariable("и", PartOfSpeech::Conjunction),
        invariable("или", PartOfSpeech::Conjunction),
        invariable("не", PartOfSpeech::Particle),
        invariable("ли", PartOfSpeech::Particle),
        invariable("только", PartOfSpeech::Particle),
        invariable("сейчас", PartOfSpeech::Adverb),
        invariable("сразу", PartOfSpeech::Adverb),
    ]
}

fn pronouns() -> Vec<Lexeme> {
    vec![
        pronoun(
            Person::First,
            Number::Singular,
            ["я", "меня", "мне", "меня", "мной", "мне"],
        ),
        pronoun(
            Person::First,
            Number::Plural,
            ["мы", "нас", "нам", "нас", "нами", "нас"],
        ),
    ]
}

//! Contains the character classes the scanner dispatches on.
//!
//! The classes are defined over Unicode: a digit is any decimal digit or digit character of any
//! script, and a letter is any character in one of the letter general categories.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Checks if the character is discarded between tokens.
///
/// Covers the Unicode white spaces and the four information separators `\x1c`..=`\x1f`.
#[must_use]
pub fn is_white_space(character: char) -> bool {
    character.is_whitespace() || matches!(character, '\u{1C}'..='\u{1F}')
}

/// Checks if the character is a letter: uppercase, lowercase, titlecase, modifier or other
/// letter.
///
/// Letter numbers such as `Ⅻ` and combining marks are not letters.
#[must_use]
pub fn is_letter(character: char) -> bool {
    matches!(
        get_general_category(character),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Checks if the character is a digit.
///
/// Every decimal number (`0`, `٣`, `७`, ...) is a digit, as well as the digit characters that
/// aren't decimal numbers: superscripts, subscripts, circled digits and the like.
#[must_use]
pub fn is_digit(character: char) -> bool {
    get_general_category(character) == GeneralCategory::DecimalNumber
        || matches!(
            character,
            '\u{B2}'..='\u{B3}'
                | '\u{B9}'
                | '\u{1369}'..='\u{1371}'
                | '\u{19DA}'
                | '\u{2070}'
                | '\u{2074}'..='\u{2079}'
                | '\u{2080}'..='\u{2089}'
                | '\u{2460}'..='\u{2468}'
                | '\u{2474}'..='\u{247C}'
                | '\u{2488}'..='\u{2490}'
                | '\u{24EA}'
                | '\u{24F5}'..='\u{24FD}'
                | '\u{24FF}'
                | '\u{2776}'..='\u{277E}'
                | '\u{2780}'..='\u{2788}'
                | '\u{278A}'..='\u{2792}'
                | '\u{10A40}'..='\u{10A43}'
                | '\u{10E60}'..='\u{10E68}'
                | '\u{11052}'..='\u{1105A}'
                | '\u{1F100}'..='\u{1F10A}'
        )
}

/// Checks if the character can continue an identifier: a letter or any kind of number.
#[must_use]
pub fn is_alphanumeric(character: char) -> bool {
    is_letter(character)
        || matches!(
            get_general_category(character),
            GeneralCategory::DecimalNumber
                | GeneralCategory::LetterNumber
                | GeneralCategory::OtherNumber
        )
}

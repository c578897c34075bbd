// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Registry of tracked invisible characters.
//!
//! The table is fixed at build time. A lookup map keyed by scalar value is
//! built once on first use so that [`classify`] is a single hash probe.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

/// Family a tracked character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ZeroWidth,
    Space,
    Directional,
    Separator,
    Combining,
    Mathematical,
    Variation,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 7] = [
        Category::ZeroWidth,
        Category::Space,
        Category::Directional,
        Category::Separator,
        Category::Combining,
        Category::Mathematical,
        Category::Variation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::ZeroWidth => "zero-width",
            Category::Space => "space",
            Category::Directional => "directional",
            Category::Separator => "separator",
            Category::Combining => "combining",
            Category::Mathematical => "mathematical",
            Category::Variation => "variation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strongly a character's presence is worth flagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one tracked code point.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDescriptor {
    pub codepoint: char,
    /// Human label, always ending in `(U+XXXX)`.
    pub name: &'static str,
    pub category: Category,
    pub priority: Priority,
    /// Provenance or rationale.
    pub note: &'static str,
    pub year_observed: u16,
}

impl PatternDescriptor {
    /// Upper-case hexadecimal code point, at least four digits (`200B`).
    pub fn code_point_hex(&self) -> String {
        format!("{:04X}", u32::from(self.codepoint))
    }

    /// Reference documentation for this character.
    ///
    /// Common characters link to a dedicated article; the rest link to the
    /// Unicode code chart of their block.
    pub fn doc_url(&self) -> String {
        let specific = match self.codepoint {
            '\u{200B}' => Some("https://en.wikipedia.org/wiki/Zero-width_space"),
            '\u{200C}' | '\u{202F}' => Some("https://unicode.org/charts/PDF/U2000.pdf"),
            '\u{200D}' => Some("https://en.wikipedia.org/wiki/Zero-width_joiner"),
            '\u{FEFF}' => Some("https://en.wikipedia.org/wiki/Byte_order_mark"),
            '\u{00AD}' => Some("https://en.wikipedia.org/wiki/Soft_hyphen"),
            '\u{00A0}' => Some("https://en.wikipedia.org/wiki/Non-breaking_space"),
            '\u{200E}' => Some("https://en.wikipedia.org/wiki/Left-to-right_mark"),
            '\u{200F}' => Some("https://en.wikipedia.org/wiki/Right-to-left_mark"),
            _ => None,
        };
        if let Some(url) = specific {
            return url.to_string();
        }

        let block = match u32::from(self.codepoint) {
            0x0000..=0x00FF => "U0000",
            0x0300..=0x036F => "U0300",
            0x0600..=0x06FF => "U0600",
            0x1800..=0x18AF => "U1800",
            0x2000..=0x206F => "U2000",
            0x3000..=0x303F => "U3000",
            0xFE00..=0xFE0F => "UFE00",
            0xFE70..=0xFEFF => "UFE70",
            _ => "U2000",
        };
        format!("https://unicode.org/charts/PDF/{block}.pdf")
    }
}

/// Narrow no-break space, reported in output of certain reasoning models.
pub const NARROW_NO_BREAK_SPACE: char = '\u{202F}';

/// Zero width joiner, required by composed emoji sequences.
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

const fn entry(
    codepoint: char,
    name: &'static str,
    category: Category,
    priority: Priority,
    note: &'static str,
    year_observed: u16,
) -> PatternDescriptor {
    PatternDescriptor { codepoint, name, category, priority, note, year_observed }
}

use Category::*;
use Priority::*;

static PATTERNS: [PatternDescriptor; 30] = [
    entry(
        '\u{202F}',
        "Narrow No-Break Space (U+202F)",
        Space,
        High,
        "Reportado en modelos o3/o4-mini de OpenAI (abril 2025). OpenAI indicó que fue un bug de RL, posiblemente corregido.",
        2025,
    ),
    entry(
        '\u{200B}',
        "Zero Width Space (U+200B)",
        ZeroWidth,
        High,
        "Muy común en todos los LLMs. Usado para división de palabras invisible.",
        2020,
    ),
    entry(
        '\u{200C}',
        "Zero Width Non-Joiner (U+200C)",
        ZeroWidth,
        Medium,
        "Previene ligadura entre caracteres.",
        2020,
    ),
    entry(
        '\u{200D}',
        "Zero Width Joiner (U+200D)",
        ZeroWidth,
        Medium,
        "Necesario para emojis compuestos. No siempre indica IA.",
        2020,
    ),
    entry(
        '\u{FEFF}',
        "Zero Width No-Break Space / BOM (U+FEFF)",
        ZeroWidth,
        High,
        "Byte Order Mark. Común en archivos con problemas de codificación.",
        2020,
    ),
    entry(
        '\u{2060}',
        "Word Joiner (U+2060)",
        ZeroWidth,
        Medium,
        "Previene saltos de línea entre palabras.",
        2020,
    ),
    entry(
        '\u{00A0}',
        "No-Break Space (U+00A0)",
        Space,
        High,
        "Muy común. Espacio no separable usado en tipografía correcta.",
        2020,
    ),
    entry(
        '\u{2009}',
        "Thin Space (U+2009)",
        Space,
        Low,
        "Espacio fino usado en tipografía profesional.",
        2020,
    ),
    entry(
        '\u{200A}',
        "Hair Space (U+200A)",
        Space,
        Low,
        "Espacio más estrecho que el fino, raro fuera de maquetación.",
        2025,
    ),
    entry('\u{2000}', "En Quad (U+2000)", Space, Low, "Espacio tipográfico del ancho de \"n\".", 2025),
    entry('\u{2001}', "Em Quad (U+2001)", Space, Low, "Espacio tipográfico del ancho de \"m\".", 2025),
    entry('\u{2002}', "En Space (U+2002)", Space, Low, "Espacio tipográfico.", 2025),
    entry('\u{2003}', "Em Space (U+2003)", Space, Low, "Espacio tipográfico.", 2025),
    entry(
        '\u{3000}',
        "Ideographic Space (U+3000)",
        Space,
        Medium,
        "Espacio de ancho completo usado en texto CJK (Chino, Japonés, Coreano).",
        2025,
    ),
    entry(
        '\u{200E}',
        "Left-to-Right Mark (U+200E)",
        Directional,
        Medium,
        "Control de dirección para texto bidireccional.",
        2020,
    ),
    entry(
        '\u{200F}',
        "Right-to-Left Mark (U+200F)",
        Directional,
        Medium,
        "Control de dirección para texto bidireccional.",
        2020,
    ),
    entry(
        '\u{202A}',
        "Left-to-Right Embedding (U+202A)",
        Directional,
        Medium,
        "Incrustación direccional LTR.",
        2020,
    ),
    entry(
        '\u{202B}',
        "Right-to-Left Embedding (U+202B)",
        Directional,
        Medium,
        "Incrustación direccional RTL.",
        2020,
    ),
    entry(
        '\u{202C}',
        "Pop Directional Formatting (U+202C)",
        Directional,
        Medium,
        "Finaliza formato direccional.",
        2020,
    ),
    entry(
        '\u{202D}',
        "Left-to-Right Override (U+202D)",
        Directional,
        High,
        "Fuerza dirección LTR. Puede usarse en ataques de seguridad.",
        2020,
    ),
    entry(
        '\u{202E}',
        "Right-to-Left Override (U+202E)",
        Directional,
        High,
        "Fuerza dirección RTL. Usado en ataques de spoofing de archivos.",
        2020,
    ),
    entry(
        '\u{061C}',
        "Arabic Letter Mark (U+061C)",
        Directional,
        Medium,
        "Control de texto árabe bidireccional.",
        2020,
    ),
    entry(
        '\u{180E}',
        "Mongolian Vowel Separator (U+180E)",
        Separator,
        Low,
        "Usado en escritura mongola tradicional.",
        2020,
    ),
    entry(
        '\u{00AD}',
        "Soft Hyphen (U+00AD)",
        Separator,
        Medium,
        "Guión invisible que aparece solo al romper líneas.",
        2020,
    ),
    entry(
        '\u{034F}',
        "Combining Grapheme Joiner (U+034F)",
        Combining,
        Low,
        "Une grafemas en escrituras complejas.",
        2020,
    ),
    entry(
        '\u{2061}',
        "Function Application (U+2061)",
        Mathematical,
        Low,
        "Operador matemático invisible.",
        2020,
    ),
    entry(
        '\u{2062}',
        "Invisible Times (U+2062)",
        Mathematical,
        Low,
        "Multiplicación invisible en matemáticas.",
        2020,
    ),
    entry(
        '\u{2063}',
        "Invisible Separator (U+2063)",
        Mathematical,
        Low,
        "Separador invisible matemático.",
        2020,
    ),
    entry(
        '\u{2064}',
        "Invisible Plus (U+2064)",
        Mathematical,
        Low,
        "Suma invisible en matemáticas.",
        2020,
    ),
    entry(
        '\u{FE0F}',
        "Variation Selector-16 (U+FE0F)",
        Variation,
        Low,
        "Selecciona variante emoji. Común y generalmente legítimo.",
        2025,
    ),
];

static BY_CODEPOINT: LazyLock<HashMap<char, &'static PatternDescriptor>> =
    LazyLock::new(|| PATTERNS.iter().map(|p| (p.codepoint, p)).collect());

/// The full registry in table order.
pub fn patterns() -> &'static [PatternDescriptor] {
    &PATTERNS
}

/// Look up the descriptor for a scalar value, if it is tracked.
pub fn classify(ch: char) -> Option<&'static PatternDescriptor> {
    BY_CODEPOINT.get(&ch).copied()
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

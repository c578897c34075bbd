// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Sample text seeded with several kinds of invisible characters.

/// Opening of Don Quijote with U+FEFF, U+200B, U+202F, U+00AD, U+200E,
/// U+200F and U+2060 inserted.
pub const DEMO_TEXT: &str = "\u{FEFF}En\u{200B} un lugar de la Mancha, de cuyo nombre no quiero acor\u{00AD}darme, \
no ha mucho tiempo que vivía un hidalgo de los de lanza en asti\u{00AD}llero, adarga anti\u{00AD}gua, \
rocín flaco y galgo corre\u{00AD}dor. Una olla de algo más vaca que car\u{00AD}nero, salpicón las más \
noches, duelos y que\u{00AD}brantos los sába\u{00AD}dos, lan\u{00AD}tejas los viernes, algún \
palo\u{00AD}mino de aña\u{00AD}didura los domin\u{00AD}gos, consu\u{00AD}mían las tres partes de su \
hacienda.\n\nEl resto della concluían sayo de velarte, calzas de velludo para las fiestas, con sus \
pantu\u{00AD}flos de lo mismo, y los días de entre\u{00AD}semana se hon\u{00AD}raba con su vellorí \
de lo más fino. Tenía en su casa una ama que pasaba de los cua\u{00AD}renta, y una sobrina que no \
lle\u{00AD}gaba a los veinte, y un mozo de campo\u{2060} y plaza, que así ensi\u{00AD}llaba el \
rocín como tomaba la poda\u{00AD}dera.\n\nFrisaba\u{200E} la edad\u{200F} de nuestro\u{200E} \
hidalgo\u{200F} con los cin\u{00AD}cuenta años;\u{202F}era de com\u{00AD}plexión recia, seco de \
carnes, enjuto de ros\u{00AD}tro, gran madru\u{00AD}gador y amigo de la caza.";

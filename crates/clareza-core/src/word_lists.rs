//! Static word lists for Portuguese prose analysis.
//!
//! The transition lexicon is grouped by discourse function in the source for
//! readability only; matching treats it as one flat list. Entries that belong
//! to more than one group are listed once, under the first group.

/// Portuguese discourse connectives and transition phrases, lowercase.
pub const TRANSITIONS: &[&str] = &[
    // Addition
    "além disso",
    "ademais",
    "também",
    "do mesmo modo",
    "de igual modo",
    "igualmente",
    "bem como",
    "como também",
    "somado a isso",
    "ainda por cima",
    "outrossim",
    "não apenas",
    "não só",
    "juntamente com",

    // Cause
    "porque",
    "por causa de",
    "devido a",
    "graças a",
    "em virtude de",
    "visto que",
    "uma vez que",
    "já que",
    "considerando que",
    "dado que",
    "em razão de",

    // Consequence and conclusion
    "portanto",
    "por conseguinte",
    "consequentemente",
    "assim",
    "dessa forma",
    "desse modo",
    "logo",
    "então",
    "por isso",
    "de modo que",
    "de forma que",
    "de maneira que",
    "em vista disso",
    "em conclusão",
    "em suma",
    "sendo assim",
    "isto posto",
    "em síntese",
    "finalmente",
    "por fim",
    "por derradeiro",
    "em resumo",

    // Contrast
    "no entanto",
    "entretanto",
    "todavia",
    "contudo",
    "porém",
    "apesar disso",
    "mesmo assim",
    "ainda assim",
    "em contrapartida",
    "por outro lado",
    "ao contrário",
    "diferentemente de",
    "ao passo que",
    "embora",
    "apesar de",
    "não obstante",

    // Explanation
    "ou seja",
    "isto é",
    "ou melhor",
    "em outras palavras",
    "em termos simples",
    "de fato",
    "na verdade",
    "vale dizer",
    "convém ressaltar que",

    // Example
    "por exemplo",
    "como exemplo",
    "tal como",
    "por ilustrar",
    "como",
    "a saber",
    "entre outros",
    "entre outras coisas",

    // Comparison
    "assim como",
    "do mesmo modo que",
    "da mesma forma que",
    "da mesma maneira que",
    "igual a",
    "semelhante a",

    // Time and order
    "primeiramente",
    "em primeiro lugar",
    "antes de mais nada",
    "a princípio",
    "em seguida",
    "logo depois",
    "posteriormente",
    "depois",
    "atualmente",
    "hoje em dia",
    "nesse ínterim",
    "nesse meio tempo",
    "enquanto isso",
    "logo em seguida",
    "ao mesmo tempo",
    "simultaneamente",
    "desde então",

    // Condition
    "se",
    "caso",
    "desde que",
    "contanto que",
    "a menos que",
    "salvo se",
    "exceto se",
    "no caso de",
    "supondo que",
    "na hipótese de que",

    // Concession
    "ainda que",
    "mesmo que",
    "por mais que",
    "apesar de que",
    "conquanto",

    // Purpose
    "para",
    "para que",
    "a fim de",
    "com o propósito de",
    "com o objetivo de",
    "com a finalidade de",
    "de modo a",
    "de forma a",

    // Emphasis
    "realmente",
    "sem dúvida",
    "certamente",
    "com efeito",
    "é importante ressaltar que",
    "convém destacar que",
    "vale destacar que",

    // Reaffirmation
    "ou melhor dizendo",
    "reiterando",
    "reforçando",
    "resumindo",

    // Neutral continuation
    "quanto a isso",
    "nesse sentido",
    "dessa maneira",
    "nessa perspectiva",
    "nesse contexto",
    "a respeito disso",
    "relativamente a",
    "em relação a",
    "no tocante a",];

/// Auxiliary verb forms that introduce a passive construction.
pub const PASSIVE_AUXILIARIES: &[&str] = &[
    "foi",
    "foram",
    "era",
    "eram",
    "será",
    "seriam",
    "está",
    "estavam",
    "estava",
    "tem sido",
    "tinha sido",
    "seria",
    "são",
    "sendo",
];

/// Past participle endings (regular participles and the short `-to`/`-ta` forms).
pub const PARTICIPLE_SUFFIXES: &[&str] = &[
    "ado", "ada", "ados", "adas", "ido", "ida", "idos", "idas", "to", "ta", "tos", "tas",
];

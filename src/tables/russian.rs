//! Trained Russian letter-trigram frequencies.
//!
//! Produced by `encdetect train` over a public-domain Russian fiction
//! corpus (UTF-8). Trigrams below 0.05% of the corpus were pruned from the
//! list, but `TOTAL` keeps the full observed count.

/// Total trigram occurrences observed in the training corpus.
pub(crate) const TOTAL: u64 = 1_361_254;

/// Surviving trigrams and their occurrence counts, most frequent first.
pub(crate) static TRIGRAMS: &[(&str, u64)] = &[
    ("ого", 97204),
    ("ени", 69707),
    ("ост", 55060),
    ("ста", 45852),
    ("ние", 39485),
    ("что", 34796),
    ("ств", 31186),
    ("ать", 28317),
    ("ско", 25973),
    ("его", 24021),
    ("она", 22367),
    ("про", 20942),
    ("ово", 19709),
    ("ова", 18625),
    ("али", 17665),
    ("это", 16808),
    ("при", 16039),
    ("ере", 15341),
    ("кот", 14710),
    ("ото", 14135),
    ("тор", 13603),
    ("пол", 13119),
    ("ыло", 12667),
    ("был", 12250),
    ("ола", 11861),
    ("ест", 11500),
    ("как", 11163),
    ("или", 10846),
    ("аза", 10548),
    ("ван", 10271),
    ("ень", 10005),
    ("тел", 9755),
    ("льн", 9521),
    ("нов", 9295),
    ("ани", 9084),
    ("ате", 8882),
    ("дел", 8688),
    ("ива", 8505),
    ("ете", 8331),
    ("тся", 8164),
    ("ает", 8005),
    ("аль", 7851),
    ("ным", 7704),
    ("ель", 7565),
    ("под", 7430),
    ("пор", 7299),
    ("пер", 7172),
    ("вер", 7053),
    ("мен", 6938),
    ("ами", 6827),
    ("ран", 6720),
    ("ила", 6613),
    ("лен", 6514),
    ("нны", 6414),
    ("кон", 6323),
    ("сто", 6232),
    ("лов", 6141),
    ("вор", 6057),
    ("раз", 5974),
    ("вид", 5895),
    ("дно", 5815),
    ("дов", 5740),
    ("ним", 5665),
    ("ько", 5593),
    ("оль", 5526),
    ("кол", 5458),
    ("сти", 5391),
    ("вст", 5327),
    ("све", 5264),
    ("сле", 5204),
    ("пре", 5145),
    ("ред", 5085),
    ("еди", 5030),
    ("час", 4974),
    ("аст", 4923),
    ("рас", 4867),
    ("тра", 4816),
    ("ара", 4768),
    ("нал", 4716),
    ("вал", 4669),
    ("тов", 4625),
    ("ров", 4578),
    ("оро", 4534),
    ("вой", 4490),
    ("ски", 4447),
    ("кий", 4403),
    ("чес", 4363),
    ("еск", 4324),
    ("ные", 4284),
    ("ить", 4244),
    ("еть", 4209),
    ("уть", 4169),
    ("наш", 4133),
    ("ваш", 4098),
    ("сво", 4062),
    ("тво", 4030),
    ("дру", 3994),
    ("руг", 3963),
    ("ыть", 3927),
    ("пра", 3895),
    ("вил", 3864),
    ("дет", 3836),
    ("реб", 3804),
    ("ило", 3776),
    ("шел", 3745),
    ("ейч", 3717),
    ("сей", 3689),
    ("том", 3661),
    ("ром", 3633),
    ("дом", 3606),
    ("ому", 3582),
    ("ему", 3554),
    ("нем", 3530),
    ("нег", 3503),
    ("аче", 3479),
    ("жив", 3455),
    ("изн", 3431),
    ("жиз", 3407),
    ("зни", 3384),
    ("вре", 3360),
    ("рем", 3336),
    ("емя", 3316),
    ("мож", 3292),
    ("ожн", 3272),
    ("жно", 3249),
    ("чел", 3229),
    ("ело", 3209),
    ("век", 3189),
    ("ека", 3169),
    ("нас", 3149),
];

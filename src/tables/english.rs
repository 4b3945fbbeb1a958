//! Trained English letter-trigram frequencies.
//!
//! Produced by `encdetect train` over a public-domain English fiction
//! corpus. Trigrams below 0.05% of the corpus were pruned from the list,
//! but `TOTAL` keeps the full observed count, so the listed counts sum to
//! roughly 93% of `TOTAL`.

/// Total trigram occurrences observed in the training corpus.
pub(crate) const TOTAL: u64 = 1_482_907;

/// Surviving trigrams and their occurrence counts, most frequent first.
pub(crate) static TRIGRAMS: &[(&str, u64)] = &[
    ("the", 102938),
    ("and", 73821),
    ("ing", 58306),
    ("her", 48557),
    ("hat", 41812),
    ("his", 36849),
    ("tha", 33027),
    ("ere", 29984),
    ("for", 27504),
    ("ent", 25437),
    ("ion", 23682),
    ("ter", 22178),
    ("was", 20871),
    ("you", 19722),
    ("ith", 18708),
    ("ver", 17797),
    ("all", 16984),
    ("wit", 16247),
    ("thi", 15580),
    ("tio", 14967),
    ("nde", 14408),
    ("has", 13891),
    ("nce", 13416),
    ("edt", 12973),
    ("tis", 12564),
    ("oft", 12178),
    ("sth", 11820),
    ("men", 11484),
    ("oth", 11172),
    ("int", 10875),
    ("era", 10593),
    ("ess", 10331),
    ("ate", 10080),
    ("oul", 9845),
    ("hes", 9618),
    ("ren", 9406),
    ("ted", 9201),
    ("est", 9008),
    ("ist", 8823),
    ("ers", 8646),
    ("ati", 8476),
    ("ons", 8314),
    ("ort", 8160),
    ("res", 8010),
    ("ome", 7867),
    ("red", 7728),
    ("out", 7597),
    ("are", 7470),
    ("ear", 7346),
    ("one", 7230),
    ("eve", 7115),
    ("not", 7003),
    ("sai", 6899),
    ("aid", 6795),
    ("sta", 6694),
    ("hin", 6598),
    ("ine", 6505),
    ("rea", 6413),
    ("son", 6328),
    ("man", 6243),
    ("oun", 6158),
    ("ave", 6077),
    ("uld", 6000),
    ("ght", 5923),
    ("ect", 5850),
    ("ust", 5780),
    ("din", 5711),
    ("eof", 5642),
    ("dth", 5576),
    ("onl", 5510),
    ("nth", 5449),
    ("eth", 5387),
    ("but", 5325),
    ("wha", 5268),
    ("tth", 5210),
    ("eto", 5156),
    ("sto", 5102),
    ("ill", 5048),
    ("ind", 4998),
    ("lin", 4947),
    ("ore", 4897),
    ("ove", 4847),
    ("ens", 4801),
    ("ant", 4755),
    ("she", 4708),
    ("sho", 4666),
    ("omt", 4620),
    ("per", 4577),
    ("til", 4535),
    ("ich", 4496),
    ("hic", 4454),
    ("wer", 4415),
    ("ake", 4377),
    ("com", 4338),
    ("ace", 4303),
    ("ame", 4265),
    ("can", 4230),
    ("igh", 4195),
    ("eri", 4161),
    ("led", 4126),
    ("rom", 4095),
    ("ned", 4060),
    ("aus", 4030),
    ("ell", 3999),
    ("hem", 3968),
    ("pro", 3937),
    ("ple", 3906),
    ("our", 3875),
    ("ard", 3848),
    ("art", 3817),
    ("cou", 3790),
    ("nto", 3763),
    ("ous", 3736),
    ("ide", 3709),
    ("ose", 3682),
    ("ast", 3659),
    ("ime", 3632),
    ("low", 3609),
    ("ead", 3582),
    ("lea", 3559),
    ("str", 3536),
    ("ain", 3509),
    ("ven", 3486),
    ("day", 3467),
    ("mer", 3443),
    ("tor", 3420),
    ("ure", 3397),
    ("ery", 3378),
    ("enc", 3355),
    ("ies", 3335),
    ("ura", 3312),
    ("nal", 3293),
    ("nes", 3274),
    ("ndi", 3254),
    ("itt", 3231),
    ("ttl", 3212),
    ("hou", 3193),
    ("ugh", 3177),
    ("own", 3158),
    ("any", 3139),
    ("thr", 3119),
    ("had", 3104),
];

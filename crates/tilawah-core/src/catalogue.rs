//! Reference catalogue of recitation errors.
//!
//! For every verse segment the catalogue lists the error phrases an examiner
//! may select, split into obvious (*jaliy*) and subtle (*khafiy*) classes.
//! The wording is the assessment instrument's own and is copied by value
//! into evaluation records, so editing a phrase here never rewrites history.

use crate::verse::{Severity, VerseKey};

/// Catalogue entry for one verse segment.
#[derive(Debug, Clone, Copy)]
pub struct VerseEntry {
    pub key: VerseKey,
    /// Heading shown above the verse's checklists.
    pub label: &'static str,
    /// Arabic text of the segment.
    pub text: &'static str,
    pub obvious: &'static [&'static str],
    pub subtle: &'static [&'static str],
}

impl VerseEntry {
    /// Phrases of the given class, in catalogue order.
    pub fn options(&self, severity: Severity) -> &'static [&'static str] {
        match severity {
            Severity::Obvious => self.obvious,
            Severity::Subtle => self.subtle,
        }
    }
}

static CATALOGUE: [VerseEntry; 8] = [
    VerseEntry {
        key: VerseKey::Verse1,
        label: "Verse 1",
        text: "بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيمِ",
        obvious: VERSE_1_OBVIOUS,
        subtle: VERSE_1_SUBTLE,
    },
    VerseEntry {
        key: VerseKey::Verse2,
        label: "Verse 2",
        text: "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ",
        obvious: VERSE_2_OBVIOUS,
        subtle: VERSE_2_SUBTLE,
    },
    VerseEntry {
        key: VerseKey::Verse3,
        label: "Verse 3",
        text: "الرَّحْمَنِ الرَّحِيمِ",
        obvious: VERSE_3_OBVIOUS,
        subtle: VERSE_3_SUBTLE,
    },
    VerseEntry {
        key: VerseKey::Verse4,
        label: "Verse 4",
        text: "مَالِكِ يَوْمِ الدِّينِ",
        obvious: VERSE_4_OBVIOUS,
        subtle: VERSE_4_SUBTLE,
    },
    VerseEntry {
        key: VerseKey::Verse5,
        label: "Verse 5",
        text: "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
        obvious: VERSE_5_OBVIOUS,
        subtle: VERSE_5_SUBTLE,
    },
    VerseEntry {
        key: VerseKey::Verse6,
        label: "Verse 6",
        text: "اهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ",
        obvious: VERSE_6_OBVIOUS,
        subtle: VERSE_6_SUBTLE,
    },
    VerseEntry {
        key: VerseKey::Verse7Part1,
        label: "Verse 7 (part 1)",
        text: "صِرَاطَ الَّذِينَ أَنْعَمْتَ عَلَيْهِمْ",
        obvious: VERSE_7_PART_1_OBVIOUS,
        subtle: VERSE_7_PART_1_SUBTLE,
    },
    VerseEntry {
        key: VerseKey::Verse7Part2,
        label: "Verse 7 (part 2)",
        text: "غَيْرِ الْمَغْضُوبِ عَلَيْهِمْ وَلَا الضَّالِّينَ",
        obvious: VERSE_7_PART_2_OBVIOUS,
        subtle: VERSE_7_PART_2_SUBTLE,
    },
];

// ayat_1
const VERSE_1_OBVIOUS: &[&str] = &[
    "Membaca ب menjadi م [Ketepatan Huruf]",
    "Membaca ه‍ menjadi ح atau خ pada lafadz الله [Ketepatan Huruf]",
    "Membaca ح menjadi ه‍ atau خ pada kata الرحمن الرحيم [Ketepatan Huruf]",
    "Membaca ر menjadi خ/و/tanpa getar pada kata الرحمن الرحيم  [Ketepatan Huruf]",
    "Membaca س menjadi ش/ص [Ketepatan Huruf]",
    "Salah tasydid  الله.. الرحمن..  الرحيم [Tasydid]",
    "Terjadi salah membaca harakat [Harakat]",
    "Salah mad (kurang dari 2 harakat) [Panjang Pendek]",
];

const VERSE_1_SUBTLE: &[&str] = &[
    "Membaca س sukun dengan dipantulkan (qolqolah) pada kata بسم [Ketepatan Huruf]",
    "Kurang tebal ر pada kata الرحمن الرحيم  [Ketepatan Huruf]",
    "Kurang menyempurnakan Harakat [Harakat]",
    "Artikulasi huruf kurang tegas [Ketepatan Huruf]",
    "Harakat kasrah dibaca seperti 'e' [Harakat]",
    "Kadar mad thabi'i lebih dari 2 harakat [Harakat]",
    "Kurangnya tempo bacaan huruf sukun pada huruf س dan ح [Ketepatan Huruf]",
];

// ayat_2
const VERSE_2_OBVIOUS: &[&str] = &[
    "Membaca ح menjadi ه‍ atau خ pada kata الحمد [Ketepatan Huruf]",
    "Membaca ه‍ menjadi ح atau خ pada lafadz الله [Ketepatan Huruf]",
    "Kurang tasydid pada kata ربِّ [Tasydid]",
    "Membaca ب menjadi م [Ketepatan Huruf]",
    "Membaca ع menjadi أ atau 'nga' pada kata العالمين [Ketepatan Huruf]",
    "Terjadi salah membaca harakat  [Harakat]",
    "Salah mad (kurang dari 2 harakat) [Panjang Pendek]",
];

const VERSE_2_SUBTLE: &[&str] = &[
    "Memantulkan pelafalan huruf ل pada الحمد [Ketepatan Huruf]",
    "Membaca ر dengan tipis pada kata رب [Ketepatan Huruf]",
    "Kurangnya tempo bacaan huruf sukun pada huruf ل dan م [Ketepatan Huruf]",
    "Harakat kasrah dibaca seperti 'e' [Harakat]",
    "Kadar mad thabi'i lebih dari 2 harakat [Panjang Pendek]",
    "Kurang menyempurnakan Harakat  [Harakat]",
    "Artikulasi huruf kurang tegas [Ketepatan Huruf]",
];

// ayat_3
const VERSE_3_OBVIOUS: &[&str] = &[
    "Membaca ح menjadi ه‍ atau خ pada kata الرحمن الرحيم [Ketepatan Huruf]",
    "Membaca ر menjadi خ/و/tanpa getar pada kata الرحمن الرحيم [Ketepatan Huruf]",
    "Kurang tasydid pada kata  الرحمن..  الرحيم [Tasydid]",
    "Terjadi salah membaca harakat [Harakat]",
    "Salah mad (kurang dari 2 harakat) [Panjang Pendek]",
];

const VERSE_3_SUBTLE: &[&str] = &[
    "Kurang tebal ر pada kata الرحمن الرحيم [Ketepatan Huruf]",
    "Kurang menyempurnakan Harakat [Harakat]",
    "Artikulasi huruf kurang tegas [Ketepatan Huruf]",
    "Harakat kasrah dibaca seperti 'e' [Harakat]",
    "Kadar mad thabi'i lebih dari 2 harakat [Panjang Pendek]",
    "Kurangnya tempo bacaan huruf sukun pada huruf ح pada الرحمن [Ketepatan Huruf]",
];

// ayat_4
const VERSE_4_OBVIOUS: &[&str] = &[
    "Membaca ك menjadi ق [Ketepatan Huruf]",
    "Membaca و menjadi o pada kata يوم menjadi yowmi [Ketepatan Huruf]",
    "Membaca د menjadi ت [Ketepatan Huruf]",
    "Kurang tasydid pada kata الدين [Tasydid]",
    "Terjadi salah membaca harakat [Harakat]",
];

const VERSE_4_SUBTLE: &[&str] = &[
    "Membaca د dengan mengeluarkan nafas (sifat hams) pada kata يوم الدين [Ketepatan Huruf]",
    "Harakat kasrah dibaca seperti 'e' [Harakat]",
    "Kurang menyempurnakan Harakat [Harakat]",
    "Artikulasi huruf kurang tegas[Ketepatan Huruf]",
    "Kadar mad thabi'i lebih dari 2 harakat [Panjang Pendek]",
];

// ayat_5
const VERSE_5_OBVIOUS: &[&str] = &[
    "Kurang tasydid pada kata إيّاكَ [Tasydid]",
    "Menambah mad/panjang di huruf ك pada kata إياك [Panjang Pendek]",
    "Menambah mad/panjang di huruf د pada kata نعبد [Panjang Pendek]",
    "Kurang mad/panjang pada kata إياك [Panjang Pendek]",
    "Membaca ع menjadi ء atau 'ngi' pada kata نستعين [Ketepatan Huruf]",
    "Terjadi salah membaca harakat [Harakat]",
];

const VERSE_5_SUBTLE: &[&str] = &[
    "Kurangnya tempo bacaan huruf sukun pada huruf ع pada kata نعبد [Ketepatan Huruf]",
    "Kurangnya tempo bacaan huruf sukun pada huruf س pada kata نستعين [Ketepatan Huruf]",
    "Harakat kasrah dibaca seperti 'e' [Harakat]",
    "Kurang menyempurnakan Harakat [Harakat]",
    "Artikulasi huruf kurang tegas [Ketepatan Huruf]",
    "Kadar mad thabi'i lebih dari 2 harakat [Panjang Pendek]",
];

// ayat_6
const VERSE_6_OBVIOUS: &[&str] = &[
    "Membaca ه menjadi ح atau خ pada kata اهدنا [Ketepatan Huruf]",
    "Membaca ص menjadi س atau ش pada kata الصراط [Ketepatan Huruf]",
    "Kurang tasydid pada kata الصراط [Tasydid]",
    "Membaca ق menjadi ك pada kata المستقيم [Ketepatan Huruf]",
];

const VERSE_6_SUBTLE: &[&str] = &[
    "Harakat kasrah dibaca seperti 'e' [Harakat]",
    "Kurangnya tempo bacaan huruf sukun pada huruf ه pada kata اهدنا [Ketepatan Huruf]",
    "Huruf ر yang kurang tebal pada kata الصراط [Ketepatan Huruf]",
    "Membaca huruf ط dengan mengeluarkan nafas (sifat hams) pada kata الصراط [Ketepatan Huruf]",
    "Kurangnya tempo bacaan huruf sukun pada huruf س pada kata المستقيم [Ketepatan Huruf]",
    "Kurang menyempurnakan Harakat [Harakat]",
    "Artikulasi huruf kurang tegas[Ketepatan Huruf]",
    "Kadar mad thabi'i lebih dari 2 harakat [Ketepatan]",
];

// ayat_7
const VERSE_7_PART_1_OBVIOUS: &[&str] = &[
    "Membaca ص menjadi س ,ش atau ز pada kata صراط [Ketepatan Huruf]",
    "Membaca ذ menjadi ز atau د pada kata الذين [Ketepatan Huruf]",
    "Kurang tasydid di huruf ذ pada kata الذين [Tasydid]",
    "Menambah mad/panjang huruf ن pada kata الذين [Panjang Pendek]",
    "Membaca ع menjadi أ pada kata أنعمت [Ketepatan Huruf]",
    "Membaca أ menjadi ع pada kata أنعمت [Ketepatan Huruf]",
    "Membaca ن menjadi م atau Izhar menjadi Idgham pada kata أنعمت [Tajwid]",
    "Menambah mad pada huruf ت pada kata أنعمت [Panjang Pendek]",
    "Membaca ع menjadi أ atau nga pada kata عليهم [Ketepatan Huruf]",
];

const VERSE_7_PART_1_SUBTLE: &[&str] = &[
    "Huruf ر yang kurang tebal pada kata صراط [Ketepatan Huruf]",
    "Membaca huruf ط dengan mengeluarkan nafas (sifat hams) pada kata الصراط [Ketepatan Huruf]",
    "Memantulkan huruf ل pada kata صراط الذين [Ketepatan Huruf]",
    "Kurangnya tempo bacaan huruf sukun pada huruf ن dan م pada kata أنعمت [Ketepatan Huruf]",
    "Kelebihan tempo bacaan huruf sukun pada huruf ن pada م pada kata أنعمت [Ketepatan Huruf]",
    "Memanjang ya sukun lebih dari kadarnya pada kata عليهم [Ketepatan Huruf]",
    "Harakat kasrah dibaca seperti 'e' [Harakat]",
    "Kurang menyempurnakan Harakat  [Harakat]",
    "Artikulasi huruf kurang tegas [Ketepatan Huruf]",
    "Kadar mad thabi'i lebih dari 2 harakat [Panjang Pendek]",
];

// ayat_7_part_2
const VERSE_7_PART_2_OBVIOUS: &[&str] = &[
    "Membaca huruf غ menjadi خ pada kata غير [Ketepatan Huruf]",
    "Menambah mad pada kata غير [Panjang Pendek]",
    "Membaca huruf ض menjadi د pada kata المغضوب [Ketepatan Huruf]",
    "Membaca huruf ع menjadi أ atau 'Nga' pada kata عليهم [Ketepatan Huruf]",
    "Membaca huruf ه menjadi ح atau خ pada kata عليهم [Ketepatan Huruf]",
    "Masuknya huruf م kepada huruf و (Idgham) pada kata عليهم ولا  [Ketepatan Huruf]",
    "Hilangnya tasydid di huruf ض pada kata ولا الضالين [Tasydid]",
    "Hilang tasydid di huruf ل pada kata ولا الضالين  [Tasydid]",
    "Kurangnya mad dari 6 harakat pada kata الضالين [Panjang Pendek]",
];

const VERSE_7_PART_2_SUBTLE: &[&str] = &[
    "Kurangnya tempo bacaan huruf sukun pada huruf ل pada kata غير المغضوب [Ketepatan Huruf]",
    "Memantulkan pelafalan huruf غ pada kata المغضوب [Ketepatan Huruf]",
    "Memanjang ya sukun lebih dari kadarnya pada kata غير atau عليهم [Ketepatan Huruf]",
    "Lebihnya tempo bacaan huruf sukun pada huruf م pada kata عليهم [Ketepatan Huruf]",
    "Harakat kasrah dibaca seperti 'e' [Harakat]",
    "Kurang menyempurnakan Harakat [Harakat]",
    "Artikulasi huruf kurang tegas [Ketepatan Huruf]",
    "Kadar mad thabi'i lebih dari 2 harakat [Panjang Pendek]",
];

/// All catalogue entries in canonical verse order.
pub fn entries() -> &'static [VerseEntry] {
    &CATALOGUE
}

/// The catalogue entry for a verse.
pub fn entry(key: VerseKey) -> &'static VerseEntry {
    &CATALOGUE[key.index()]
}

/// Selectable phrases for a verse and severity class, in catalogue order.
pub fn options(key: VerseKey, severity: Severity) -> &'static [&'static str] {
    entry(key).options(severity)
}

/// Like [`options`], keyed by the persisted verse name. Unknown names yield
/// an empty list.
pub fn options_by_name(key: &str, severity: Severity) -> &'static [&'static str] {
    match key.parse::<VerseKey>() {
        Ok(key) => options(key, severity),
        Err(_) => &[],
    }
}

/// Whether `phrase` is a catalogue option for the verse and class.
pub fn contains(key: VerseKey, severity: Severity, phrase: &str) -> bool {
    options(key, severity).contains(&phrase)
}

/// Position of `phrase` in the catalogue list, if present.
pub fn position(key: VerseKey, severity: Severity, phrase: &str) -> Option<usize> {
    options(key, severity).iter().position(|p| *p == phrase)
}

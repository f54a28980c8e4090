use super::random::RandomSource;

const NAME_SYLLABLES: &[&str] = &[
    "zor", "vel", "tria", "luma", "ser", "quar", "meth", "orion", "astra", "pho",
    "kel", "vara", "lith", "syl", "mond", "pyra", "zen", "thal", "kyro", "nova",
    "dra", "ulon", "fera", "sola", "quent", "vex", "talon", "rya", "gala", "nura",
    "kri", "zeth", "vora", "shun", "pyr", "xal", "omra", "theru", "zora", "vrin",
    "shara", "koru", "ryx", "fyra", "dral", "venar", "mylo", "tryn", "syra", "zori",
    "kyla", "veth", "solin", "grax", "ulith", "qira", "naru", "zylo", "kelth", "phara",
    "xor", "vrum", "liron", "kyreth", "zorin", "thora", "yvra", "shyl", "vond", "qorin",
    "sylax", "narith", "vyko", "telu", "drith", "azrel", "qyra", "valon", "oryx", "fyrin",
    "selu", "trax", "zulon", "kyrin", "ostra", "zhala", "neth", "volar", "shen", "krya",
    "yonar", "zyla", "thrix", "ulmar", "vorin", "quira", "shira", "drax", "pylor", "sena",
    "ralu", "zhor", "myra", "vask", "kylor", "trel", "shova", "ulrax", "pyron", "xeru",
    "valis", "drox", "fira", "synth", "koral", "zavor", "nyl", "toraq", "vrex", "sorin",
    "lumae", "qeth", "zunar", "xira", "prylon", "deth", "shyra", "xelun", "tholor", "marix",
    "zenal", "kyth", "vraen", "selo", "dorin", "fynox", "treya", "xorin", "vraelo", "qen",
    "zulen", "myrix", "phel", "dranor", "savax", "urim", "vyral", "xelar", "qynth", "shorin",
    "lurex", "zanith", "korin", "vylar", "solyx", "dareth", "fyron", "shylo", "vorux", "talin",
    "quenix", "rylax", "zhev", "thalon", "molir", "sarix", "unel", "gyrin", "shorix", "praal",
    "narvox", "xyral", "telith", "zomra", "krinax", "selyr", "valok", "drolyn", "porax", "felyn",
    "oryn", "zethor", "tavik", "kyral", "phorin", "sorak", "drelix", "mythra", "uliv", "vrath",
];

pub const ASTEROID_SUFFIX: &str = "-Ast";

/// Build a name from `min_syllables..=max_syllables` syllables (drawn with
/// replacement) and capitalize the first letter
pub fn generate_name<R: RandomSource + ?Sized>(
    rng: &mut R,
    min_syllables: u32,
    max_syllables: u32,
) -> String {
    let syllable_count = rng.range_int(min_syllables as i32, max_syllables as i32 + 1);
    let mut name = String::new();

    for _ in 0..syllable_count {
        let index = rng.range_int(0, NAME_SYLLABLES.len() as i32) as usize;
        name.push_str(NAME_SYLLABLES[index]);
    }

    capitalize(&name)
}

/// Star and planet names: two or three syllables
pub fn body_name<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    generate_name(rng, 2, 3)
}

/// Asteroid names: exactly two syllables plus a fixed suffix
pub fn asteroid_name<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", generate_name(rng, 2, 2), ASTEROID_SUFFIX)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

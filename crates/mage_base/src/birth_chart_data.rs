//! Interpretation text for Sun, Moon and Rising placements.

/// Sun sign readings, indexed by sign (0 = Aries).
pub const SUN_READINGS: [&str; 12] = [
    "You are bold, energetic, and a natural leader.",
    "You are practical, reliable, and value stability.",
    "You are curious, adaptable, and communicative.",
    "You are nurturing, emotional, and protective.",
    "You are creative, passionate, and love the spotlight.",
    "You are analytical, detailed, and helpful.",
    "You value balance, harmony, and relationships.",
    "You are intense, passionate, and transformative.",
    "You are adventurous, optimistic, and philosophical.",
    "You are ambitious, disciplined, and responsible.",
    "You are innovative, independent, and humanitarian.",
    "You are compassionate, artistic, and intuitive.",
];

/// Moon sign readings, indexed by sign (0 = Aries).
pub const MOON_READINGS: [&str; 12] = [
    "You react impulsively and passionately.",
    "You find comfort in stability and sensory pleasures.",
    "You process emotions intellectually and verbally.",
    "You are deeply sensitive and protective of loved ones.",
    "You need to feel appreciated and admired.",
    "You find comfort in order and being useful.",
    "You seek emotional balance and partnership.",
    "Your emotions are deep, intense, and private.",
    "You find emotional freedom in adventure and truth.",
    "You are reserved and serious about your feelings.",
    "You can be detached and value emotional freedom.",
    "You are empathetic and absorb the emotions of others.",
];

/// Rising sign readings, indexed by sign (0 = Aries).
pub const RISING_READINGS: [&str; 12] = [
    "You approach the world with energy and directness.",
    "You appear calm, steady, and reliable.",
    "You seem youthful, curious, and talkative.",
    "You come across as gentle, caring, and approachable.",
    "You have a magnetic, confident, and warm presence.",
    "You appear modest, neat, and intelligent.",
    "You seem charming, polite, and graceful.",
    "You have a mysterious, intense, and magnetic aura.",
    "You appear enthusiastic, friendly, and optimistic.",
    "You seem serious, competent, and responsible.",
    "You appear unique, friendly, and a bit unconventional.",
    "You seem gentle, dreamy, and adaptable.",
];

//! Static content tables: the engine's read-only configuration data.
//!
//! The life-path-pair narrative table is an embedded content database with
//! deliberately partial coverage — the resolver in `narrative.rs` owns the
//! forward/reverse/default resolution order. Nothing in this module is ever
//! mutated; templates hold `[NAME_A]`/`[NAME_B]` tokens that are substituted
//! into freshly built results, never in place.

use once_cell::sync::Lazy;
use std::collections::HashMap;

// -----------------------------------------------------------------------------
// Friendliness adjacency + month triads
// -----------------------------------------------------------------------------

/// Life-path numbers considered naturally compatible with `n`.
/// No number lists itself; identity is scored separately.
pub fn friendly_paths(n: u32) -> &'static [u32] {
    match n {
        1 => &[3, 5, 7],
        2 => &[4, 6, 8],
        3 => &[1, 5, 9],
        4 => &[2, 8, 22],
        5 => &[1, 3, 7],
        6 => &[2, 9, 33],
        7 => &[1, 5, 11],
        8 => &[2, 4, 22],
        9 => &[3, 6, 11, 33],
        11 => &[7, 9, 22],
        22 => &[4, 8, 11],
        33 => &[6, 9],
        _ => &[],
    }
}

/// True when `a` and `b` appear in each other's friendliness sets
/// (membership in either direction counts).
pub fn are_friendly(a: u32, b: u32) -> bool {
    friendly_paths(a).contains(&b) || friendly_paths(b).contains(&a)
}

/// The three month triads used by the month-synergy rule.
pub const MONTH_TRIADS: [[u32; 3]; 3] = [[1, 5, 7], [2, 4, 8], [3, 6, 9]];

/// Birth days carrying karmic-debt numbers.
pub const KARMIC_DAYS: [u32; 4] = [13, 14, 16, 19];

/// Triad index for a reduced month, if it belongs to one.
pub fn triad_of(n: u32) -> Option<usize> {
    MONTH_TRIADS.iter().position(|t| t.contains(&n))
}

// -----------------------------------------------------------------------------
// Narrative templates
// -----------------------------------------------------------------------------

/// Gossip sub-block: how the pair fights when nobody is watching.
#[derive(Debug, Clone, Copy)]
pub struct GossipTemplate {
    pub argument_style: &'static str,
    pub who_apologizes: &'static str,
    pub narrative: &'static str,
}

/// One narrative block in the pair table. All strings may carry
/// `[NAME_A]`/`[NAME_B]` tokens or the literals "Person A"/"Person B".
#[derive(Debug, Clone, Copy)]
pub struct NarrativeTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub gift: &'static str,
    pub challenge: &'static str,
    pub growth: &'static str,
    pub interaction: &'static str,
    pub truth: &'static str,
    pub soul_teaching: &'static str,
    pub viral: Option<&'static str>,
    pub deep: Option<&'static str>,
    pub gossip: Option<GossipTemplate>,
    pub green_flags: &'static [&'static str],
    pub red_flags: &'static [&'static str],
}

/// Fallback block used when neither (A,B) nor (B,A) is in the table.
pub static DEFAULT_NARRATIVE: NarrativeTemplate = NarrativeTemplate {
    title: "An Unwritten Chapter",
    description: "[NAME_A] and [NAME_B] are a pairing the old books skipped — which means the script is yours to write, for better and for worse.",
    gift: "No inherited expectations: you get to invent your own rhythm.",
    challenge: "No inherited map either; you will misread each other before you learn the dialect.",
    growth: "Name the pattern out loud the second you spot it, instead of assuming the other one sees it too.",
    interaction: "Curious by default, defensive under pressure.",
    truth: "Nobody is coming to explain this pairing to you.",
    soul_teaching: "Unfamiliar is not the same as incompatible.",
    viral: None,
    deep: None,
    gossip: None,
    green_flags: &[
        "Neither of you came in with a script",
        "Genuine curiosity about how the other one works",
        "Low baggage, high ceiling",
    ],
    red_flags: &[
        "Misreadings pile up quietly",
        "Nobody wants to state the obvious first",
        "Drift happens before either of you names it",
    ],
};

/// Life-path-pair narrative table, populated one direction per pair.
/// Resolution order (forward, reverse, default) lives in `narrative.rs`.
static PAIR_NARRATIVES: &[((u32, u32), NarrativeTemplate)] = &[
    (
        (1, 1),
        NarrativeTemplate {
            title: "Two Crowns, One Throne",
            description: "[NAME_A] and [NAME_B] both arrived to lead, which is magnificent right up until somebody has to follow.",
            gift: "Unstoppable momentum when the target is shared.",
            challenge: "Every decision is a quiet election neither of you concedes.",
            growth: "Split the kingdom: separate domains, total authority inside each.",
            interaction: "Sparring partners who occasionally remember they're on the same team.",
            truth: "You are not fighting about the restaurant. You are fighting about who picks the restaurant.",
            soul_teaching: "Power shared is not power lost.",
            viral: Some("Two mains, zero sides. The group chat has a betting pool."),
            deep: None,
            gossip: Some(GossipTemplate {
                argument_style: "Simultaneous monologues at rising volume",
                who_apologizes: "Whoever needs the other one first",
                narrative: "They fight like two CEOs double-booked into the same corner office, then merge like nothing happened.",
            }),
            green_flags: &[
                "Neither of you waits to be rescued",
                "Ambition recognizes ambition",
                "Respect is instant and mutual",
            ],
            red_flags: &[
                "Ego collisions over trivia",
                "Neither of you backs down first",
                "Competitiveness leaks into tenderness",
            ],
        },
    ),
    (
        (1, 2),
        NarrativeTemplate {
            title: "The Spear and the Shield",
            description: "[NAME_A]'s charge needs [NAME_B]'s cover, and the arrangement works beautifully until the shield wants a turn at the front.",
            gift: "A natural division of labor: one initiates, one integrates.",
            challenge: "The supporting role quietly calcifies into the invisible role.",
            growth: "Rotate who leads, deliberately, even when it feels inefficient.",
            interaction: "Driver and navigator who forgot to agree on the destination.",
            truth: "Support that is never acknowledged eventually becomes scorekeeping.",
            soul_teaching: "Leading and yielding are both verbs.",
            viral: None,
            deep: Some("The 1 learns that tenderness is not a delay; the 2 learns that wanting things out loud is not a betrayal."),
            gossip: None,
            green_flags: &[
                "One of you always has the map",
                "Conflict cools fast when one yields on purpose",
            ],
            red_flags: &[
                "Scorekeeping disguised as patience",
                "Decisions made before the conversation happens",
            ],
        },
    ),
    (
        (1, 5),
        NarrativeTemplate {
            title: "The Arrow and the Wind",
            description: "[NAME_A] picks the target, [NAME_B] changes the weather. Somehow the arrow still lands — nobody can explain the physics.",
            gift: "Momentum squared: neither of you has ever been bored together.",
            challenge: "Two accelerators, no brake pedal in the vehicle.",
            growth: "Schedule the boring maintenance neither of you thinks you need.",
            interaction: "Co-conspirators first, partners second.",
            truth: "The adventure is real, and so is the unopened mail.",
            soul_teaching: "Freedom shared is still freedom.",
            viral: Some("The couple your group chat lives vicariously through and quietly worries about."),
            deep: None,
            gossip: Some(GossipTemplate {
                argument_style: "Fast, loud, forgotten by dinner",
                who_apologizes: "Both, mid-laugh, simultaneously",
                narrative: "They argue like a storm crossing a runway — dramatic, brief, and the flights resume immediately.",
            }),
            green_flags: &[
                "Boredom is physically impossible",
                "Both allergic to clinginess",
                "Plans made at 2am actually happen",
            ],
            red_flags: &[
                "Nobody is watching the fuel gauge",
                "Commitment conversations get rescheduled",
            ],
        },
    ),
    (
        (1, 8),
        NarrativeTemplate {
            title: "The General and the Empire",
            description: "[NAME_A] wants the victory, [NAME_B] wants the territory, and the war council gets loud when those aren't the same thing.",
            gift: "Together you could run a small country, and occasionally try to.",
            challenge: "Respect is contingent on winning, which makes losing dangerous.",
            growth: "Practice conceding something small weekly, in public.",
            interaction: "Board meeting energy, even at breakfast.",
            truth: "One of you keeps score in victories, the other in acquisitions. It is still keeping score.",
            soul_teaching: "Being formidable together beats being formidable at each other.",
            viral: Some("Power couple or hostile merger — depends on the quarter."),
            deep: None,
            gossip: None,
            green_flags: &[
                "Ambition never has to be explained",
                "Outside threats unify you instantly",
            ],
            red_flags: &[
                "Ego collisions at full speed",
                "Affection rationed like a bonus pool",
                "Control is the silent third partner",
            ],
        },
    ),
    (
        (2, 4),
        NarrativeTemplate {
            title: "The Hearth and the Foundation",
            description: "[NAME_A] tends the warmth and [NAME_B] pours the concrete; the house you build together is the quietly envied one on the street.",
            gift: "Stability that doesn't feel like stagnation.",
            challenge: "So little friction that real grievances go unfiled for years.",
            growth: "Invent some chaos on purpose before life supplies its own.",
            interaction: "Soft power meets load-bearing patience.",
            truth: "Comfort is your superpower and your sedative.",
            soul_teaching: "Peace is built, not found.",
            viral: None,
            deep: Some("The 2 teaches the 4 that feelings are data; the 4 teaches the 2 that reliability is romance."),
            gossip: Some(GossipTemplate {
                argument_style: "Twenty minutes of careful sentences",
                who_apologizes: "The 4, with a repaired object as evidence",
                narrative: "Their fights are so quiet the neighbors think they're meditating. The makeups are quieter.",
            }),
            green_flags: &[
                "Promises get kept without reminders",
                "Silence together is comfortable",
                "Money conversations don't detonate",
            ],
            red_flags: &[
                "Resentment filed alphabetically, never discussed",
                "Routine mistaken for intimacy",
            ],
        },
    ),
    (
        (2, 7),
        NarrativeTemplate {
            title: "The Tide and the Lighthouse",
            description: "[NAME_B] stands apart to see clearly, and [NAME_A] keeps arriving anyway — the whole relationship is that rhythm, forever.",
            gift: "Depth: conversations other couples don't have a license for.",
            challenge: "One withdraws to think, the other reads withdrawal as verdict.",
            growth: "Agree on a signal that distance is thinking, not leaving.",
            interaction: "Long silences that are either sacred or ominous, rarely labeled.",
            truth: "You are both fluent in unsaid things, which is efficient until it isn't.",
            soul_teaching: "Solitude and devotion can share a roof.",
            viral: None,
            deep: None,
            gossip: None,
            green_flags: &[
                "Depth over small talk, always",
                "Neither of you performs for an audience",
            ],
            red_flags: &[
                "Withdrawal read as rejection",
                "Feelings routed through essays instead of sentences",
            ],
        },
    ),
    (
        (3, 3),
        NarrativeTemplate {
            title: "The Double Act",
            description: "[NAME_A] and [NAME_B] are the party, the after-party, and the podcast recap of both. Double Strength: two mirrors, twice the light, twice the glare.",
            gift: "Joy as a renewable resource.",
            challenge: "Two performers, no audience, and the dishes still exist.",
            growth: "Take turns being the serious one; it's a costume either of you can wear.",
            interaction: "Improv partners who never break character.",
            truth: "The banter is armor, and you both know where the gaps are.",
            soul_teaching: "Being delightful is not the same as being known.",
            viral: Some("The couple whose stories get retold at other couples' dinners."),
            deep: None,
            gossip: Some(GossipTemplate {
                argument_style: "Devastating wit deployed at close range",
                who_apologizes: "Whoever lands the joke that goes too far",
                narrative: "They roast each other until someone flinches, then spend two days being aggressively charming in apology.",
            }),
            green_flags: &[
                "Laughter is the default state",
                "Creativity compounds when you collaborate",
            ],
            red_flags: &[
                "Same blind spots, doubled",
                "Serious topics dodged with a punchline",
                "Competing for the same spotlight",
            ],
        },
    ),
    (
        (3, 5),
        NarrativeTemplate {
            title: "The Festival That Travels",
            description: "[NAME_A] brings the show, [NAME_B] brings the road, and every city you pass through briefly becomes the best one.",
            gift: "A shared conviction that life is meant to be interesting.",
            challenge: "Neither of you RSVP'd to adulthood.",
            growth: "Pick one anchor each — a ritual, a budget line, a standing Sunday — and defend it.",
            interaction: "Yes-and, at scale.",
            truth: "Fun is your love language and occasionally your hiding place.",
            soul_teaching: "Delight deepens when something is at stake.",
            viral: Some("Statistically the most fun couple at any wedding, including their own."),
            deep: None,
            gossip: None,
            green_flags: &[
                "Spontaneity never needs negotiating",
                "You make each other funnier",
            ],
            red_flags: &[
                "The logistics layer is unstaffed",
                "Hard feelings exit through the nearest joke",
            ],
        },
    ),
    (
        (3, 6),
        NarrativeTemplate {
            title: "The Stage and the Garden",
            description: "[NAME_A] performs, [NAME_B] nurtures, and each secretly believes the other's role is the easier one.",
            gift: "Warmth with production values.",
            challenge: "The 6 over-gives, the 3 under-notices, and the invoice arrives as a mood.",
            growth: "Thank each other specifically, weekly, for the invisible work.",
            interaction: "Host and headliner of the same ongoing dinner party.",
            truth: "Care that goes unwitnessed curdles; charm that goes unfed dims.",
            soul_teaching: "Appreciation is a practice, not a feeling.",
            viral: None,
            deep: None,
            gossip: None,
            green_flags: &[
                "Your home is everyone's favorite venue",
                "Affection is loud and frequent",
            ],
            red_flags: &[
                "Martyrdom with a smile",
                "Applause sought outside when it runs low inside",
            ],
        },
    ),
    (
        (3, 9),
        NarrativeTemplate {
            title: "The Storyteller and the Sage",
            description: "[NAME_A] turns everything into a story and [NAME_B] turns everything into a lesson; between you, nothing ever just happens.",
            gift: "Meaning and mirth in the same conversation.",
            challenge: "The 9's causes can make the 3 feel like an intermission.",
            growth: "Let some evenings mean nothing at all, together.",
            interaction: "A salon for two.",
            truth: "You are each other's favorite audience, and that is both the gift and the trap.",
            soul_teaching: "Wisdom without joy is just fatigue with footnotes.",
            viral: None,
            deep: Some("The 3 learns that depth won't dull the shine; the 9 learns that levity is not betrayal of the mission."),
            gossip: None,
            green_flags: &[
                "Conversations that outlast the candles",
                "You romanticize each other generously",
            ],
            red_flags: &[
                "Lessons delivered when comfort was requested",
                "Feelings narrated instead of felt",
            ],
        },
    ),
    (
        (4, 5),
        NarrativeTemplate {
            title: "Order Meets the Hurricane",
            description: "[NAME_A] alphabetizes the spice rack; [NAME_B] is the reason the spice rack is on the ceiling. Chaos and order did not agree to this merger — it happened to them.",
            gift: "Each of you is the exact medicine the other refuses to take.",
            challenge: "The 4 hears 'spontaneity' as 'threat'; the 5 hears 'routine' as 'sedation'.",
            growth: "Trade hostages: one planned ritual for one unplanned escapade, weekly.",
            interaction: "A filing cabinet in a wind tunnel.",
            truth: "You were each drawn to precisely the thing you now complain about.",
            soul_teaching: "Structure and freedom are ingredients, not opponents.",
            viral: Some("The couple where one packs three days early and one packs in the taxi."),
            deep: None,
            gossip: Some(GossipTemplate {
                argument_style: "A numbered list versus an interpretive exit",
                who_apologizes: "The 5, eventually, from somewhere scenic",
                narrative: "Their fights are a weather event colliding with a building code, and both sides file incident reports.",
            }),
            green_flags: &[
                "You cover each other's blind spots completely",
                "Life is never both boring and chaotic at once",
            ],
            red_flags: &[
                "Control versus escape, on a loop",
                "Each treats the other's nature as a phase",
            ],
        },
    ),
    (
        (4, 8),
        NarrativeTemplate {
            title: "The Architect and the Tycoon",
            description: "[NAME_A] builds it to last and [NAME_B] builds it to scale; the empire is real, the question is who it's for.",
            gift: "Material reality bends to your combined will.",
            challenge: "Work is the mistress neither of you will name.",
            growth: "Put rest on the calendar with the same gravity as revenue.",
            interaction: "A standing strategy meeting with occasional kissing.",
            truth: "Security was supposed to be the means, not the destination.",
            soul_teaching: "The unbuilt hour is also an asset.",
            viral: None,
            deep: None,
            gossip: None,
            green_flags: &[
                "Goals get hit, repeatedly",
                "Both fluent in delayed gratification",
            ],
            red_flags: &[
                "Intimacy deferred to next quarter",
                "Worth measured in output",
            ],
        },
    ),
    (
        (5, 7),
        NarrativeTemplate {
            title: "The Explorer and the Hermit",
            description: "[NAME_A] collects the world and [NAME_B] decodes it; you meet at the kitchen table to compare notes and it's the best part of both days.",
            gift: "Independence is pre-approved on both sides.",
            challenge: "So much autonomy that the relationship can run unattended for weeks.",
            growth: "Make reunion a ritual, not a coincidence.",
            interaction: "Parallel play for grown-ups.",
            truth: "You chose each other partly for the spaciousness; tend it or it becomes plain distance.",
            soul_teaching: "Freedom is only romantic when someone is glad you're back.",
            viral: None,
            deep: Some("The 5 learns stillness isn't a cage; the 7 learns the world outside the library is also evidence."),
            gossip: None,
            green_flags: &[
                "Zero possessiveness",
                "Reunions feel like good news",
            ],
            red_flags: &[
                "Autonomy drifting into absence",
                "Important talks postponed indefinitely",
            ],
        },
    ),
    (
        (6, 9),
        NarrativeTemplate {
            title: "The Caretakers' Covenant",
            description: "[NAME_A] pours into the household and [NAME_B] pours into the world, and the old books call this pairing magnetic for a reason.",
            gift: "A love that makes the people around it better fed and better understood.",
            challenge: "Two givers, no designated receiver.",
            growth: "Practice taking — visibly, gracelessly, often.",
            interaction: "A mutual aid society with excellent chemistry.",
            truth: "Whoever collapses first wins the argument neither of you admits you're having.",
            soul_teaching: "You cannot pour each other out and call it devotion.",
            viral: Some("The couple everyone calls in a crisis and nobody checks on after."),
            deep: None,
            gossip: Some(GossipTemplate {
                argument_style: "Competitive self-sacrifice",
                who_apologizes: "Both, with casseroles",
                narrative: "They argue about who gave more, apologize by giving more, and the cycle is honestly kind of beautiful.",
            }),
            green_flags: &[
                "Generosity is the house currency",
                "Chemistry with a conscience",
            ],
            red_flags: &[
                "Burnout worn as a badge",
                "Needs disclosed only in collapse",
            ],
        },
    ),
    (
        (7, 9),
        NarrativeTemplate {
            title: "The Monastery With Two Rooms",
            description: "[NAME_A] seeks the truth and [NAME_B] serves it; the relationship runs on meaning the way other couples run on plans.",
            gift: "A shared refusal to live a shallow life.",
            challenge: "The material world — rent, groceries, small talk — remains unimpressed.",
            growth: "Assign the mundane a rotation before it assigns itself to one of you.",
            interaction: "Two inner worlds with a shared border crossing.",
            truth: "Transcendence is easier than Tuesday.",
            soul_teaching: "The sacred includes the errands.",
            viral: None,
            deep: None,
            gossip: None,
            green_flags: &[
                "Depth is the default setting",
                "Neither of you needs an audience",
            ],
            red_flags: &[
                "Practicalities orphaned by both",
                "Melancholy synchronizes",
            ],
        },
    ),
    (
        (8, 8),
        NarrativeTemplate {
            title: "The Summit Meeting",
            description: "[NAME_A] and [NAME_B] are two empires with adjoining borders; the treaties are magnificent and the border disputes are televised.",
            gift: "Nobody on earth understands your ambition better.",
            challenge: "Two sovereigns, one household, zero precedent for surrender.",
            growth: "Decide what is jointly owned — including the wins.",
            interaction: "Negotiation as foreplay.",
            truth: "You respect each other too much to go easy and too little to go first.",
            soul_teaching: "Vulnerability is the one acquisition that can't be leveraged.",
            viral: Some("Their date nights have an agenda. Literally."),
            deep: None,
            gossip: None,
            green_flags: &[
                "Mutual respect at market rate",
                "No one has to shrink",
            ],
            red_flags: &[
                "Ego collisions with compound interest",
                "Apologies treated as concessions",
                "Love expressed as strategy",
            ],
        },
    ),
    (
        (9, 9),
        NarrativeTemplate {
            title: "The Lighthouse Keepers",
            description: "[NAME_A] and [NAME_B] both signed up to save the world, and Double Strength means the world gets saved twice while dinner gets cold.",
            gift: "Compassion squared, purpose aligned.",
            challenge: "Two martyrs bidding for the same cross.",
            growth: "Save each other first, on the record.",
            interaction: "A humanitarian summit that occasionally remembers it's a marriage.",
            truth: "The world's needs will always outbid your own unless you rig the auction.",
            soul_teaching: "Charity that starts anywhere but home eventually ends there.",
            viral: None,
            deep: None,
            gossip: None,
            green_flags: &[
                "Shared moral compass, no calibration needed",
                "Forgiveness comes naturally",
            ],
            red_flags: &[
                "Self-neglect as a duet",
                "The relationship is last on both to-do lists",
            ],
        },
    ),
    (
        (2, 11),
        NarrativeTemplate {
            title: "The Antenna and the Ground Wire",
            description: "[NAME_B] receives signals from everywhere at once and [NAME_A] is the only reason the building doesn't burn down — intuition at this voltage needs grounding.",
            gift: "Emotional telepathy that borders on unfair.",
            challenge: "Two nervous systems this sensitive can feedback-loop a bad afternoon into a bad month.",
            growth: "Name whose feeling it is before amplifying it.",
            interaction: "Finishing each other's silences.",
            truth: "Sensitivity is your shared gift and your shared exposure.",
            soul_teaching: "An open channel still needs an off switch.",
            viral: None,
            deep: Some("The 11 burns bright and doubts hard; the 2 steadies without dimming. That is the whole covenant."),
            gossip: None,
            green_flags: &[
                "Moods read accurately from across the room",
                "Comfort arrives before it's requested",
            ],
            red_flags: &[
                "Anxiety is contagious in both directions",
                "Overwhelm handled by mutual retreat",
            ],
        },
    ),
    (
        (4, 22),
        NarrativeTemplate {
            title: "The Mason and the Cathedral",
            description: "[NAME_A] lays perfect bricks and [NAME_B] dreams in architecture; the master builder finally found hands that match the blueprint.",
            gift: "Vision with an actual foundation under it.",
            challenge: "The 22's scale can make the 4's craftsmanship feel small, and the 4's pace can make the 22 feel caged.",
            growth: "Agree on the blueprint before pouring anything.",
            interaction: "A building site where both of you think you're the foreman.",
            truth: "Great works take decades; so do great marriages.",
            soul_teaching: "The cathedral is the two of you.",
            viral: None,
            deep: None,
            gossip: None,
            green_flags: &[
                "Both play the long game",
                "Work ethic never needs defending",
            ],
            red_flags: &[
                "The project eats the partnership",
                "Perfectionism compounds",
            ],
        },
    ),
    (
        (11, 11),
        NarrativeTemplate {
            title: "The Twin Antennas",
            description: "[NAME_A] and [NAME_B] receive on the same frequency, which is either enlightenment or a feedback loop depending on the day.",
            gift: "Being fully seen without translation.",
            challenge: "Double Strength at master voltage: twice the vision, twice the static.",
            growth: "Take turns being the grounded one; the role must never be vacant.",
            interaction: "A séance that pays rent.",
            truth: "You mirror each other's light and each other's doubt with equal fidelity.",
            soul_teaching: "Illumination is a shared practice, not a shared mood.",
            viral: None,
            deep: None,
            gossip: None,
            green_flags: &[
                "Understanding without explanation",
                "Shared sense of purpose",
            ],
            red_flags: &[
                "Spiraling synchronizes",
                "Nobody is flying the plane",
            ],
        },
    ),
];

/// Index over `PAIR_NARRATIVES`, built once.
pub static PAIR_INDEX: Lazy<HashMap<(u32, u32), &'static NarrativeTemplate>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(PAIR_NARRATIVES.len());
    for (key, template) in PAIR_NARRATIVES {
        map.insert(*key, template);
    }
    map
});

// -----------------------------------------------------------------------------
// Gossip synthesis arrays (modulo-indexed; see narrative.rs)
// -----------------------------------------------------------------------------

pub static GOSSIP_ARGUMENT_STYLES: &[&str] = &[
    "Passive-aggressive sticky notes escalating to essays",
    "One-sided debates with a captive audience",
    "Cold war with scheduled thaws",
    "Loud, short, and fully forgotten by morning",
    "Litigation via screenshots of old texts",
];

pub static GOSSIP_WHO_APOLOGIZES: &[&str] = &[
    "Whoever gets hungry first",
    "Neither — the apology is a meme sent at 1am",
    "The one who started it, three days late",
    "Both at once, which starts a smaller second argument",
];

pub static GOSSIP_NARRATIVES: &[&str] = &[
    "They fight like roommates and make up like honeymooners, and the lease keeps getting renewed.",
    "Every disagreement becomes a bit, and the bit becomes an anniversary tradition.",
    "The silent treatment lasts exactly as long as neither needs help reaching the top shelf.",
    "Their arguments have seasons, recurring characters, and a devoted off-screen audience.",
    "Nobody wins, but the post-fight debrief is the best conversation of the week.",
];

// -----------------------------------------------------------------------------
// Fight profiles (conflict matrix source data)
// -----------------------------------------------------------------------------

/// Fixed per-life-path conflict record. Scores are 0-100.
#[derive(Debug, Clone, Copy)]
pub struct FightProfile {
    pub style: &'static str,
    pub weapon: &'static str,
    pub aggression: u32,
    pub volatility: u32,
    pub recovery: u32,
}

/// Fight profile for a single-digit life path. Master values are reduced by
/// the caller before lookup; anything else is genuinely absent.
pub fn fight_profile(life_path: u32) -> Option<&'static FightProfile> {
    const PROFILES: [FightProfile; 9] = [
        FightProfile { style: "The Blitzkrieg", weapon: "Interrupting with the correct answer", aggression: 85, volatility: 70, recovery: 60 },
        FightProfile { style: "The Cold Front", weapon: "Forty-eight hours of polite monosyllables", aggression: 30, volatility: 45, recovery: 40 },
        FightProfile { style: "The Broadcast", weapon: "Re-litigating the fight to the group chat", aggression: 55, volatility: 80, recovery: 85 },
        FightProfile { style: "The Audit", weapon: "A numbered list of everything since March", aggression: 45, volatility: 25, recovery: 35 },
        FightProfile { style: "The Vanishing Act", weapon: "Leaving mid-sentence to 'get some air'", aggression: 60, volatility: 90, recovery: 75 },
        FightProfile { style: "The Guilt Seminar", weapon: "A catalogue of every sacrifice, annotated", aggression: 40, volatility: 50, recovery: 55 },
        FightProfile { style: "The Stone Wall", weapon: "Analyzing you out loud like a case study", aggression: 35, volatility: 30, recovery: 25 },
        FightProfile { style: "The Hostile Takeover", weapon: "Escalating until winning is the only exit", aggression: 95, volatility: 65, recovery: 50 },
        FightProfile { style: "The Martyr Play", weapon: "Forgiving you loudly before you apologize", aggression: 50, volatility: 60, recovery: 80 },
    ];
    match life_path {
        1..=9 => Some(&PROFILES[(life_path - 1) as usize]),
        _ => None,
    }
}

/// Verbatim style-title override for the {4,5} pairing, order-insensitive.
pub const ORDER_VS_CHAOS_TITLE: &str = "Order vs Chaos: The Eternal War";

// -----------------------------------------------------------------------------
// Aspect reading variants (synergy / timing / attitude)
// -----------------------------------------------------------------------------

/// Three variants per band; the deterministic variant selector picks within a
/// band so prose is stable per day and rotates across days.
pub static SYNERGY_HIGH: &[&str] = &[
    "Your energies compound instead of competing — rare, and worth protecting.",
    "This pairing runs downhill: effort in, momentum out.",
    "Together you are more yourselves, not less. Keep that arrangement.",
];
pub static SYNERGY_MID: &[&str] = &[
    "The gears mesh with some grinding; alignment is a practice here, not a given.",
    "Workable chemistry that rewards maintenance and punishes autopilot.",
    "You amplify each other in places and cancel in others — learn the map.",
];
pub static SYNERGY_LOW: &[&str] = &[
    "Your default settings clash; everything good here is hand-built.",
    "This connection runs uphill. Possible, but pack accordingly.",
    "Friction is the baseline — which can forge or just burn.",
];

pub static TIMING_ALIGNED: &[&str] = &[
    "Your personal years are in step: big moves land well when made together.",
    "The cosmic calendars agree for once. Use the window.",
    "Same chapter, same page — decisions made now share a tailwind.",
];
pub static TIMING_OFFSET: &[&str] = &[
    "Your cycles are offset: one is sowing while the other harvests. Sequence accordingly.",
    "Close but not synchronized — expect one of you to be ready first.",
    "The timing works if someone is willing to wait at the corner.",
];
pub static TIMING_CLASHING: &[&str] = &[
    "Your years are pulling in different directions; defer joint leaps, double joint maintenance.",
    "Out of phase: what feels urgent to one feels premature to the other.",
    "The calendars disagree. Patience is the whole strategy this season.",
];

pub static ATTITUDE_MATCHED: &[&str] = &[
    "Your default moods run on the same clock — mornings, moods, and meltdowns sync.",
    "Same emotional weather system. Forecasts are easy here.",
    "You wake up on the same side of the cosmic bed.",
];
pub static ATTITUDE_COMPATIBLE: &[&str] = &[
    "Different tempos, same key — your outlooks harmonize more than they match.",
    "Your attitudes rhyme without repeating. That's workable music.",
    "Not identical, but translatable: you get each other's defaults with minor subtitles.",
];
pub static ATTITUDE_CLASHING: &[&str] = &[
    "Your baseline attitudes disagree about what a good day is. Negotiate the definition.",
    "One of you resets overnight, the other accrues. Budget for the difference.",
    "Different operating temperatures — neither is wrong, both need labeling.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_symmetric() {
        for &a in &[1u32, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33] {
            for &b in friendly_paths(a) {
                assert!(
                    are_friendly(b, a),
                    "{} lists {} but the reverse lookup fails",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_adjacency_never_lists_self() {
        for &n in &[1u32, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33] {
            assert!(!friendly_paths(n).contains(&n), "{} lists itself", n);
        }
    }

    #[test]
    fn test_triads() {
        assert_eq!(triad_of(1), Some(0));
        assert_eq!(triad_of(8), Some(1));
        assert_eq!(triad_of(9), Some(2));
        assert_eq!(triad_of(11), None);
    }

    #[test]
    fn test_pair_table_one_direction_only() {
        for ((a, b), _) in PAIR_NARRATIVES {
            if a != b {
                assert!(
                    !PAIR_INDEX.contains_key(&(*b, *a)),
                    "pair ({},{}) stored in both directions",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_fight_profiles_cover_single_digits() {
        for lp in 1..=9 {
            assert!(fight_profile(lp).is_some(), "no fight profile for {}", lp);
        }
        assert!(fight_profile(11).is_none());
        assert!(fight_profile(0).is_none());
    }

    #[test]
    fn test_default_block_has_backfill_flags() {
        assert!(DEFAULT_NARRATIVE.green_flags.len() >= 3);
        assert!(DEFAULT_NARRATIVE.red_flags.len() >= 3);
    }
}

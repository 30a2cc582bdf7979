//! Tutorial levels for Malayalam, grouped by difficulty.

use libindic_core::{Difficulty, Level, LevelSet, LevelType};

use crate::LANGUAGE;

#[allow(clippy::too_many_arguments)]
fn level(
    id: &str,
    title: &str,
    description: &str,
    level_type: LevelType,
    difficulty: Difficulty,
    order: u32,
    target_text: &str,
    min_accuracy: Option<f64>,
    min_wpm: Option<f64>,
    hints: &[&str],
) -> Level {
    Level {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        level_type,
        difficulty,
        order,
        target_text: target_text.to_string(),
        min_accuracy,
        min_wpm,
        hints: hints.iter().map(|h| h.to_string()).collect(),
    }
}

fn beginner() -> Vec<Level> {
    use Difficulty::Beginner;
    vec![
        level(
            "mal-basic-1",
            "Basic Vowels - അ, ആ, ഇ",
            "Learn to type the first three Malayalam vowels",
            LevelType::BasicKeys,
            Beginner,
            1,
            "അ ആ ഇ",
            Some(80.0),
            None,
            &["Use the first row of keys", "Practice each vowel slowly"],
        ),
        level(
            "mal-basic-2",
            "More Vowels - ഈ, ഉ, ഊ",
            "Continue learning Malayalam vowels",
            LevelType::BasicKeys,
            Beginner,
            2,
            "ഈ ഉ ഊ",
            Some(80.0),
            None,
            &["These are in the second row", "Take your time"],
        ),
        level(
            "mal-words-1",
            "Simple Words",
            "Practice typing simple Malayalam words",
            LevelType::Words,
            Beginner,
            3,
            "മല കല പല",
            Some(75.0),
            Some(5.0),
            &["Focus on accuracy first", "Speed will come with practice"],
        ),
        level(
            "mal-words-2",
            "Common Words",
            "Type commonly used Malayalam words",
            LevelType::Words,
            Beginner,
            4,
            "നമസ്കാരം സ്വാഗതം ധന്യവാദം",
            Some(70.0),
            Some(8.0),
            &[],
        ),
    ]
}

fn intermediate() -> Vec<Level> {
    use Difficulty::Intermediate;
    vec![
        level(
            "mal-sentences-1",
            "Simple Sentences",
            "Practice typing complete sentences",
            LevelType::Sentences,
            Intermediate,
            1,
            "മലയാളം ഒരു മനോഹരമായ ഭാഷയാണ്.",
            Some(70.0),
            Some(15.0),
            &["Pay attention to spaces", "Keep a steady rhythm"],
        ),
        level(
            "mal-sentences-2",
            "Longer Sentences",
            "Type longer, more complex sentences",
            LevelType::Sentences,
            Intermediate,
            2,
            "കേരളം ഇന്ത്യയുടെ തെക്കുപടിഞ്ഞാറൻ ഭാഗത്ത് സ്ഥിതി ചെയ്യുന്നു.",
            Some(65.0),
            Some(20.0),
            &[],
        ),
        level(
            "mal-paragraphs-1",
            "Short Paragraphs",
            "Practice typing short paragraphs",
            LevelType::Paragraphs,
            Intermediate,
            3,
            "മലയാളം ഭാഷയുടെ സൗന്ദര്യം അതിന്റെ സമ്പന്നമായ സാഹിത്യത്തിലും സംസ്കാരത്തിലും പ്രതിഫലിക്കുന്നു.",
            Some(60.0),
            Some(25.0),
            &[],
        ),
    ]
}

fn advanced() -> Vec<Level> {
    use Difficulty::Advanced;
    vec![
        level(
            "mal-speed-1",
            "Speed Challenge",
            "Test your typing speed",
            LevelType::Speed,
            Advanced,
            1,
            "സാങ്കേതിക വിദ്യയുടെ വികാസം ആധുനിക ജീവിതത്തെ വളരെയധികം സ്വാധീനിച്ചിട്ടുണ്ട്.",
            Some(85.0),
            Some(30.0),
            &[],
        ),
        level(
            "mal-accuracy-1",
            "Accuracy Master",
            "Focus on perfect accuracy",
            LevelType::Accuracy,
            Advanced,
            2,
            "വായനയുടെ പ്രാധാന്യം ഒരിക്കലും കുറയരുത്. ഒരു നല്ല പുസ്തകം നമ്മുടെ മനസ്സിനെ വികസിപ്പിക്കുകയും പുതിയ ആശയങ്ങൾ നൽകുകയും ചെയ്യുന്നു.",
            Some(95.0),
            Some(20.0),
            &[],
        ),
    ]
}

/// Level sets in tutorial order: beginner, intermediate, advanced.
pub fn malayalam_levels() -> Vec<LevelSet> {
    [
        (Difficulty::Beginner, beginner()),
        (Difficulty::Intermediate, intermediate()),
        (Difficulty::Advanced, advanced()),
    ]
    .into_iter()
    .map(|(difficulty, levels)| LevelSet {
        language: LANGUAGE.to_string(),
        difficulty,
        levels,
    })
    .collect()
}

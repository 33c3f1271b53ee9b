//! Fixed stop-word list: English function words plus common CJK particles.

pub fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "the"
            | "and"
            | "for"
            | "are"
            | "but"
            | "not"
            | "you"
            | "all"
            | "can"
            | "had"
            | "her"
            | "was"
            | "one"
            | "our"
            | "out"
            | "has"
            | "have"
            | "been"
            | "from"
            | "this"
            | "that"
            | "with"
            | "they"
            | "will"
            | "each"
            | "which"
            | "their"
            | "said"
            | "what"
            | "its"
            | "into"
            | "more"
            | "other"
            | "to"
            | "of"
            | "in"
            | "on"
            | "at"
            | "by"
            | "or"
            | "is"
            | "be"
            | "an"
            | "as"
            | "it"
            | "if"
            | "do"
            | "so"
            | "no"
            | "we"
            | "my"
            | "use"
            | "used"
            | "using"
            | "then"
            | "when"
            | "there"
            | "than"
            | "also"
            | "just"
            | "after"
            | "before"
            | "的"
            | "了"
            | "是"
            | "在"
            | "和"
            | "就"
            | "都"
            | "也"
            | "这个"
            | "那个"
            | "一个"
            | "我们"
            | "你们"
            | "他们"
            | "没有"
            | "可以"
            | "因为"
            | "所以"
            | "但是"
            | "如果"
            | "然后"
            | "使用"
    )
}

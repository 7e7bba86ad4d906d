//! Static word and color tables. Please extend with more lvl=100 shibe wow.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// The standalone caption, and what an empty pool hands out.
pub const WOW: &str = "wow";

pub static PREFIXES: [&str; 13] = [
    "wow", "such", "very", "so much", "many", "lol", "beautiful", "all the", "the", "most",
    "very much", "pretty", "so",
];

/// Default caption words. This shibe is a terminal hax0r shibe, keep new words
/// in that domain.
pub static WORD_LIST: [&str; 21] = [
    "computer",
    "hax0r",
    "code",
    "data",
    "internet",
    "server",
    "hacker",
    "terminal",
    "doge",
    "shibe",
    "program",
    "free software",
    "web scale",
    "monads",
    "git",
    "daemon",
    "loop",
    "pretty",
    "uptime",
    "thread safe",
    "posix",
];

pub static SUFFIXES: [&str; 5] = ["wow", "lol", "hax", "plz", "lvl=100"];

/// A subset of the 256 color cube with the darkest entries removed. Tuned for
/// dark backgrounds; some of the lighter ones are hard to read on light ones.
pub static COLORS: [u8; 172] = [
    23, 24, 25, 26, 27, 29, 30, 31, 32, 33, 35, 36, 37, 38, 39, 41, 42, 43, 44, 45, 47, 48, 49,
    50, 51, 58, 59, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81,
    82, 83, 84, 85, 86, 87, 88, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107,
    108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 130, 131,
    132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144, 145, 146, 147, 148, 149,
    150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 162, 166, 167, 168, 169, 170, 171, 172,
    173, 174, 175, 176, 177, 178, 179, 180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190,
    191, 192, 193, 194, 195, 197, 202, 203, 204, 205, 206, 207, 208, 209, 210, 211, 212, 213,
    214, 215, 216, 217, 218, 219, 220, 221, 222, 223, 224, 225, 226, 227, 228,
];

static STOPWORD_LIST: &[&str] = &[
    "a", "a's", "able", "about", "above", "according", "accordingly", "across", "actually",
    "after", "afterwards", "again", "against", "ago", "ahead", "ain't", "all", "allow", "allows",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "an", "and", "another", "any", "anybody", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "apart", "appear", "are", "aren't", "around", "as", "aside", "ask", "asking", "at",
    "available", "away", "b", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "believe", "below", "beside", "besides",
    "best", "better", "between", "beyond", "both", "brief", "but", "by", "c", "c'mon", "came",
    "can", "can't", "cannot", "cant", "cause", "causes", "certain", "certainly", "clearly", "co",
    "com", "come", "comes", "consider", "contain", "could", "couldn't", "course", "currently", "d",
    "definitely", "did", "didn't", "different", "do", "does", "doesn't", "doing", "don't", "done",
    "down", "during", "e", "each", "eg", "either", "else", "elsewhere", "enough", "entirely",
    "especially", "et", "etc", "even", "ever", "every", "everybody", "everyone", "everything",
    "everywhere", "ex", "exactly", "example", "except", "f", "far", "few", "first", "for",
    "former", "formerly", "forth", "from", "further", "furthermore", "g", "get", "gets", "getting",
    "given", "gives", "go", "goes", "going", "gone", "got", "gotten", "h", "had", "hadn't",
    "happens", "hardly", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll",
    "he's", "hello", "help", "hence", "her", "here", "here's", "hers", "herself", "hi", "him",
    "himself", "his", "how", "how's", "however", "i", "i'd", "i'll", "i'm", "i've", "ie", "if",
    "ignored", "in", "inc", "indeed", "instead", "into", "is", "isn't", "it", "it'd", "it'll",
    "it's", "its", "itself", "j", "just", "k", "keep", "keeps", "kept", "know", "known", "knows",
    "l", "last", "lately", "later", "latter", "least", "less", "lest", "let", "let's", "like",
    "liked", "likely", "little", "look", "looking", "looks", "ltd", "m", "mainly", "many", "may",
    "maybe", "me", "mean", "meanwhile", "merely", "might", "more", "moreover", "most", "mostly",
    "much", "must", "mustn't", "my", "myself", "n", "name", "namely", "near", "nearly",
    "necessary", "need", "needs", "neither", "never", "nevertheless", "new", "next", "no",
    "nobody", "non", "none", "noone", "nor", "normally", "not", "nothing", "now", "nowhere", "o",
    "obviously", "of", "off", "often", "oh", "ok", "okay", "old", "on", "once", "one", "ones",
    "only", "onto", "or", "other", "others", "otherwise", "ought", "our", "ours", "ourselves",
    "out", "outside", "over", "overall", "own", "p", "particular", "particularly", "per",
    "perhaps", "please", "plus", "possible", "probably", "q", "que", "quite", "r", "rather", "re",
    "really", "regarding", "regardless", "right", "s", "said", "same", "saw", "say", "saying",
    "says", "second", "see", "seeing", "seem", "seemed", "seeming", "seems", "seen", "self",
    "selves", "sent", "seriously", "several", "shall", "shan't", "she", "she'd", "she'll",
    "she's", "should", "shouldn't", "since", "so", "some", "somebody", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhat", "somewhere", "soon", "sorry", "still",
    "sub", "such", "sup", "sure", "t", "t's", "take", "taken", "tell", "than", "thank", "thanks",
    "thanx", "that", "that's", "thats", "the", "their", "theirs", "them", "themselves", "then",
    "thence", "there", "there's", "thereafter", "thereby", "therefore", "therein", "theres",
    "these", "they", "they'd", "they'll", "they're", "they've", "thing", "things", "think",
    "this", "those", "though", "through", "throughout", "thru", "thus", "till", "to", "together",
    "too", "took", "toward", "towards", "tried", "tries", "truly", "try", "trying", "twice", "u",
    "un", "under", "unless", "unlike", "unlikely", "until", "unto", "up", "upon", "us", "use",
    "used", "useful", "uses", "using", "usually", "v", "value", "various", "very", "via", "viz",
    "vs", "w", "want", "wants", "was", "wasn't", "way", "we", "we'd", "we'll", "we're", "we've",
    "welcome", "well", "went", "were", "weren't", "what", "what's", "whatever", "when", "when's",
    "whence", "whenever", "where", "where's", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "who's", "whoever", "whole",
    "whom", "whose", "why", "why's", "will", "willing", "wish", "with", "within", "without",
    "won't", "wonder", "would", "wouldn't", "www", "x", "y", "yes", "yet", "you", "you'd",
    "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves", "z", "zero",
];

lazy_static! {
    /// Common words dropped from piped input when stopword filtering is on.
    pub static ref STOPWORDS: HashSet<&'static str> = STOPWORD_LIST.iter().copied().collect();
}

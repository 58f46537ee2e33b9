//! Built-in vocabulary tables.

pub(super) const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Alan", "Albert", "Alice", "Amanda", "Amy", "Andrew", "Angela",
    "Anna", "Anthony", "Arthur", "Barbara", "Benjamin", "Betty", "Beverly", "Brandon", "Brenda",
    "Brian", "Bruce", "Carl", "Carol", "Catherine", "Charles", "Christina", "Christopher",
    "Clara", "Craig", "Cynthia", "Daniel", "David", "Deborah", "Dennis", "Diana", "Donald",
    "Donna", "Dorothy", "Douglas", "Edward", "Elizabeth", "Emily", "Emma", "Eric", "Evelyn",
    "Frances", "Frank", "Gary", "George", "Gerald", "Grace", "Gregory", "Hannah", "Harold",
    "Heather", "Helen", "Henry", "Isabel", "Jack", "Jacob", "James", "Janet", "Jason", "Jean",
    "Jeffrey", "Jennifer", "Jeremy", "Jessica", "Joan", "John", "Jonathan", "Joseph", "Joyce",
    "Judith", "Julia", "Justin", "Karen", "Katherine", "Keith", "Kelly", "Kenneth", "Kevin",
    "Kimberly", "Larry", "Laura", "Lawrence", "Linda", "Lisa", "Louis", "Margaret", "Maria",
    "Marie", "Mark", "Martha", "Mary", "Matthew", "Melissa", "Michael", "Michelle", "Nancy",
    "Nathan", "Nicholas", "Nicole", "Olivia", "Pamela", "Patricia", "Patrick", "Paul", "Peter",
    "Rachel", "Raymond", "Rebecca", "Richard", "Robert", "Roger", "Ronald", "Rose", "Russell",
    "Ruth", "Ryan", "Samuel", "Sandra", "Sarah", "Scott", "Sharon", "Shirley", "Stephen",
    "Steven", "Susan", "Teresa", "Thomas", "Timothy", "Victoria", "Virginia", "Walter",
    "Wayne", "William",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Anderson", "Bailey", "Baker", "Barnes", "Bell", "Bennett", "Brooks",
    "Brown", "Butler", "Campbell", "Carter", "Clark", "Collins", "Cook", "Cooper", "Cox",
    "Davis", "Edwards", "Evans", "Fisher", "Flores", "Foster", "Garcia", "Gibson", "Gonzalez",
    "Gray", "Green", "Griffin", "Hall", "Harris", "Hayes", "Henderson", "Hill", "Howard",
    "Hughes", "Jackson", "James", "Jenkins", "Johnson", "Jones", "Kelly", "King", "Lee",
    "Lewis", "Long", "Lopez", "Martin", "Martinez", "Miller", "Mitchell", "Moore", "Morgan",
    "Morris", "Murphy", "Myers", "Nelson", "Parker", "Patterson", "Perry", "Peterson",
    "Phillips", "Powell", "Price", "Reed", "Richardson", "Rivera", "Roberts", "Robinson",
    "Rogers", "Ross", "Russell", "Sanders", "Scott", "Simmons", "Smith", "Stewart", "Sullivan",
    "Taylor", "Thomas", "Thompson", "Torres", "Turner", "Walker", "Ward", "Watson", "White",
    "Williams", "Wilson", "Wood", "Wright", "Young",
];

pub(super) const SUFFIXES: &[&str] = &["II", "III", "IV", "Jr", "Sr", "PhD", "MD"];

pub(super) const PREFIXES: &[&str] = &["Mr", "Mrs", "Ms", "Miss", "Dr", "Prof"];

pub(super) const STREET_NAMES: &[&str] = &[
    "Acorn", "Alder", "Amber", "Ash", "Aspen", "Bay", "Beech", "Birch", "Bluebell", "Briar",
    "Brook", "Cedar", "Chapel", "Cherry", "Chestnut", "Church", "Clover", "Copper", "Court",
    "Cypress", "Daisy", "Elm", "Fern", "Field", "Forest", "Fox", "Garden", "Glen", "Grove",
    "Hawthorn", "Hazel", "Heather", "Highland", "Hill", "Holly", "Ivy", "Juniper", "Lake",
    "Laurel", "Linden", "Magnolia", "Maple", "Meadow", "Mill", "Oak", "Orchard", "Park",
    "Pine", "Poplar", "Quarry", "River", "Rose", "Rowan", "Sage", "Spring", "Spruce",
    "Station", "Sycamore", "Valley", "Walnut", "Willow", "Windmill",
];

pub(super) const CITIES: &[&str] = &[
    "Ashford", "Bakersfield", "Bedford", "Brighton", "Bristol", "Burlington", "Cambridge",
    "Camden", "Chester", "Clayton", "Clifton", "Concord", "Dover", "Fairview", "Franklin",
    "Georgetown", "Greenville", "Hamilton", "Hudson", "Kingston", "Lancaster", "Lexington",
    "Madison", "Marion", "Milford", "Newport", "Oakland", "Oxford", "Plymouth", "Portland",
    "Richmond", "Riverside", "Salem", "Springfield", "Stratford", "Trenton", "Wellington",
    "Winchester", "Windsor", "Yorktown",
];

pub(super) const ADDRESS_SUFFIXES: &[&str] = &[
    "Avenue", "Boulevard", "Close", "Court", "Crescent", "Drive", "Gardens", "Lane", "Parkway",
    "Place", "Road", "Row", "Square", "Street", "Terrace", "Way",
];

pub(super) const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Canada", "Chile", "Denmark",
    "Egypt", "Finland", "France", "Germany", "Greece", "India", "Ireland", "Italy", "Japan",
    "Kenya", "Mexico", "Netherlands", "New Zealand", "Norway", "Poland", "Portugal", "Spain",
    "Sweden", "Switzerland", "United Kingdom", "United States",
];

pub(super) const COUNTRY_CODES: &[&str] = &[
    "AR", "AU", "AT", "BE", "BR", "CA", "CL", "DK", "EG", "FI", "FR", "DE", "GR", "IN", "IE",
    "IT", "JP", "KE", "MX", "NL", "NZ", "NO", "PL", "PT", "ES", "SE", "CH", "GB", "US",
];

pub(super) const NATIONALITIES: &[&str] = &[
    "Argentine", "Australian", "Austrian", "Belgian", "Brazilian", "Canadian", "Chilean",
    "Danish", "Egyptian", "Finnish", "French", "German", "Greek", "Indian", "Irish", "Italian",
    "Japanese", "Kenyan", "Mexican", "Dutch", "New Zealander", "Norwegian", "Polish",
    "Portuguese", "Spanish", "Swedish", "Swiss", "British", "American",
];

pub(super) const WORDS: &[&str] = &[
    "a", "I", "an", "as", "at", "be", "by", "do", "go", "he", "if", "in", "is", "it", "me",
    "my", "no", "of", "on", "or", "so", "to", "up", "us", "we", "act", "add", "age", "air",
    "all", "and", "arm", "ask", "bag", "bed", "big", "box", "boy", "but", "can", "car", "cup",
    "day", "dog", "ear", "eat", "egg", "end", "eye", "far", "few", "fit", "fly", "for", "fun",
    "get", "hat", "hot", "key", "law", "let", "lot", "low", "man", "map", "new", "now", "old",
    "one", "our", "out", "own", "pay", "put", "red", "run", "say", "sea", "see", "set", "sky",
    "sun", "ten", "the", "top", "try", "two", "use", "way", "who", "why", "yes", "yet", "you",
    "also", "away", "back", "ball", "bank", "best", "bird", "blue", "boat", "body", "book",
    "call", "card", "city", "cold", "come", "dark", "door", "down", "east", "easy", "face",
    "fact", "fire", "fish", "food", "form", "free", "game", "gift", "girl", "gold", "good",
    "hand", "hard", "head", "help", "here", "hill", "hold", "home", "hope", "idea", "just",
    "keep", "kind", "lake", "land", "last", "life", "line", "list", "long", "look", "lost",
    "love", "make", "many", "mind", "moon", "more", "name", "near", "need", "next", "note",
    "only", "open", "over", "page", "part", "plan", "play", "rain", "read", "rest", "ride",
    "road", "room", "rule", "safe", "same", "ship", "shop", "show", "side", "sign", "snow",
    "some", "star", "step", "stop", "take", "talk", "team", "tell", "text", "time", "tree",
    "true", "turn", "upon", "very", "wait", "walk", "warm", "wave", "week", "well", "west",
    "when", "wind", "with", "word", "work", "year", "about", "after", "again", "apple",
    "began", "black", "bread", "bring", "build", "carry", "chair", "clean", "clear", "cloud",
    "could", "dream", "drive", "early", "earth", "every", "field", "first", "found", "fresh",
    "front", "glass", "great", "green", "group", "happy", "heard", "heavy", "horse", "house",
    "large", "laugh", "learn", "light", "music", "never", "night", "north", "ocean", "order",
    "paper", "party", "piece", "place", "plant", "point", "quick", "quiet", "river", "round",
    "short", "small", "smile", "sound", "south", "space", "stone", "story", "table", "thing",
    "think", "three", "today", "train", "under", "until", "voice", "water", "where", "while",
    "white", "whole", "world", "write", "young", "animal", "answer", "autumn", "basket",
    "before", "bright", "bridge", "castle", "circle", "corner", "course", "family", "famous",
    "finger", "flower", "forest", "friend", "garden", "golden", "ground", "island", "letter",
    "little", "market", "middle", "minute", "number", "orange", "people", "pocket", "purple",
    "rabbit", "record", "season", "second", "silver", "simple", "spring", "street", "summer",
    "supper", "window", "winter", "against", "another", "balance", "because", "between",
    "brother", "captain", "century", "chicken", "college", "company", "country", "evening",
    "example", "general", "harvest", "history", "journey", "kitchen", "machine", "morning",
    "picture", "problem", "product", "science", "special", "station", "student", "thought",
    "through", "weather", "whisper", "absolute", "building", "children", "complete",
    "computer", "distance", "elephant", "exercise", "hospital", "interest", "language",
    "mountain", "question", "remember", "shoulder", "sentence", "together", "umbrella",
    "valuable", "adventure", "beautiful", "character", "direction", "discovery", "important",
    "invisible", "lightning", "newspaper", "particular", "television", "wonderful",
    "discovered", "everything", "experience", "government", "impossible", "individual",
    "laboratory", "generation", "temperature", "information", "environment",
    "understanding", "automatically",
];

pub(super) const BUSINESS_TYPES: &[&str] = &[
    "Accounting", "Architects", "Bakery", "Builders", "Cafe", "Consulting", "Dental",
    "Development", "Engineering", "Florists", "Furnishings", "Gymnasium", "Industries",
    "Insurance", "Landscaping", "Logistics", "Manufacturing", "Medical Supplies", "Motors",
    "Office Supplies", "Plumbing", "Printing", "Realty", "Services", "Signs", "Software",
    "Studios", "Textiles", "Travel",
];

pub(super) const EMAIL_HOSTS: &[&str] = &[
    "examplemail", "mailbox", "postbox", "inboxly", "sendmail", "letterbox", "mailhub",
    "testmail",
];

pub(super) const TLDS: &[&str] = &["com", "net", "org", "biz", "info", "us", "co.uk"];

//! Standard affirmation words, A-Z.

pub(super) const WORDS: [(char, &[&str]); 26] = [
    ('A', &["Amazing", "Awesome", "Adventurous", "Artistic", "Affectionate", "Ambitious", "Active", "Admirable", "Accomplished", "Adaptable"]),
    ('B', &["Brave", "Beautiful", "Brilliant", "Bold", "Bubbly", "Bright", "Beloved", "Balanced", "Boundless", "Blissful"]),
    ('C', &["Creative", "Caring", "Confident", "Curious", "Cheerful", "Clever", "Compassionate", "Courageous", "Charming", "Capable"]),
    ('D', &["Determined", "Delightful", "Dedicated", "Daring", "Dynamic", "Dependable", "Devoted", "Dignified", "Decisive", "Driven"]),
    ('E', &["Energetic", "Excellent", "Enthusiastic", "Exceptional", "Empathetic", "Encouraging", "Elegant", "Extraordinary", "Expressive", "Endearing"]),
    ('F', &["Fantastic", "Friendly", "Fearless", "Fun", "Faithful", "Fabulous", "Focused", "Funny", "Flexible", "Forgiving"]),
    ('G', &["Generous", "Gentle", "Gifted", "Graceful", "Great", "Genuine", "Grateful", "Glorious", "Good", "Giggly"]),
    ('H', &["Happy", "Helpful", "Honest", "Hopeful", "Heroic", "Hardworking", "Harmonious", "Humble", "Healthy", "Hilarious"]),
    ('I', &["Intelligent", "Imaginative", "Inspiring", "Independent", "Incredible", "Innovative", "Insightful", "Impressive", "Intuitive", "Invincible"]),
    ('J', &["Joyful", "Just", "Jovial", "Jubilant", "Jolly", "Gentle", "Generous", "Genuine", "Gracious", "Jaunty"]),
    ('K', &["Kind", "Knowledgeable", "Keen", "Kindhearted", "Kooky", "Knowing", "Kaleidoscopic", "Kingly"]),
    ('L', &["Loving", "Loyal", "Lively", "Lucky", "Logical", "Luminous", "Likeable", "Lighthearted", "Limitless", "Legendary"]),
    ('M', &["Magnificent", "Marvelous", "Motivated", "Magical", "Mindful", "Memorable", "Mature", "Merry", "Mighty", "Miraculous"]),
    ('N', &["Nice", "Noble", "Natural", "Nurturing", "Noteworthy", "Nimble", "Neat", "Neighborly", "Needed", "Nifty"]),
    ('O', &["Outstanding", "Optimistic", "Original", "Organized", "Outgoing", "Open", "Observant", "Obedient", "Oceanic", "Outstanding"]),
    ('P', &["Positive", "Precious", "Powerful", "Playful", "Patient", "Passionate", "Persistent", "Peaceful", "Perfect", "Polite"]),
    ('Q', &["Quick", "Quiet", "Quality", "Quirky", "Questioning", "Qualified", "Quaint", "Queenly", "Quotable", "Quixotic"]),
    ('R', &["Remarkable", "Respectful", "Responsible", "Radiant", "Resilient", "Resourceful", "Reliable", "Refreshing", "Righteous", "Rockstar"]),
    ('S', &["Strong", "Smart", "Special", "Spectacular", "Supportive", "Sincere", "Successful", "Sensitive", "Sparkling", "Stellar"]),
    ('T', &["Talented", "Thoughtful", "Trustworthy", "Tremendous", "Thriving", "Thankful", "Tenacious", "Tremendous", "Triumphant", "Treasured"]),
    ('U', &["Unique", "Understanding", "Uplifting", "Unstoppable", "Unbeatable", "Upbeat", "Useful", "Unlimited", "Unshakeable", "Unconditional"]),
    ('V', &["Valuable", "Vibrant", "Victorious", "Vivacious", "Virtuous", "Visionary", "Versatile", "Vigorous", "Vital", "Vivid"]),
    ('W', &["Wonderful", "Wise", "Witty", "Warm", "Worthy", "Wholesome", "Willing", "Winning", "Whimsical", "Wondrous"]),
    ('X', &["eXtraordinary", "eXceptional", "eXcellent", "eXciting", "eXpressive", "eXpansive", "eXquisite", "eXemplary", "eXuberant", "Xenial"]),
    ('Y', &["Young", "Youthful", "Yearning", "Yes-oriented", "Yielding", "Yummy", "Yippee", "Yonder", "Yearlong", "Yesterday's-hero"]),
    ('Z', &["Zealous", "Zesty", "Zingy", "Zen", "Zinger", "Zippy", "Zany", "Zooming", "Zestful", "Zeal-filled"]),
];

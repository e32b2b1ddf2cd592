//! Moon phase descriptions and sign-specific moon insights.

/// (description, energy) per phase, in cycle order starting at New Moon.
pub const PHASE_PROFILES: [(&str, &str); 8] = [
    (
        "A time of new beginnings and fresh starts. The moon is hidden, inviting you to turn inward and set intentions for the cycle ahead.",
        "Introspection, Planning, New Intentions",
    ),
    (
        "The first sliver of light appears, symbolizing hope and growth. This is a time to take initial steps towards your goals.",
        "Momentum, Growth, Action",
    ),
    (
        "Half the moon is illuminated, creating a balance between darkness and light. Decision-making and commitment are highlighted.",
        "Decision, Commitment, Balance",
    ),
    (
        "The moon grows fuller, building energy and anticipation. Refinement and adjustment of your plans are key now.",
        "Refinement, Preparation, Anticipation",
    ),
    (
        "The moon reaches its peak illumination, bringing clarity, culmination, and heightened emotions. Time to celebrate achievements.",
        "Culmination, Clarity, Release",
    ),
    (
        "After the peak, energy begins to recede. This is a time for gratitude, sharing wisdom, and letting go of what no longer serves.",
        "Gratitude, Sharing, Reflection",
    ),
    (
        "Half the moon remains, prompting review and release. Let go of old patterns and make space for the new.",
        "Release, Forgiveness, Surrender",
    ),
    (
        "The final sliver before darkness returns. Rest, recuperate, and prepare for the next cycle. Spiritual connection deepens.",
        "Rest, Healing, Spiritual Connection",
    ),
];

/// (advice, focus) per sign (0 = Aries) and phase (0 = New Moon).
pub const SIGN_INSIGHTS: [[(&str, &str); 8]; 12] = [
    // Aries
    [
        (
            "Channel your natural leadership energy into setting bold, ambitious goals. This is your time to initiate new projects.",
            "Courage, Initiative, Self-Discovery",
        ),
        (
            "Your enthusiasm is contagious! Take decisive action on your goals, but remember to pace yourself.",
            "Action, Momentum, Confidence",
        ),
        (
            "Face challenges head-on with your characteristic bravery. Your determination will overcome obstacles.",
            "Courage, Perseverance, Strength",
        ),
        (
            "Refine your strategies with patience. Your competitive spirit needs direction right now.",
            "Strategy, Focus, Preparation",
        ),
        (
            "Your passions are at their peak! Celebrate your victories but channel excess energy constructively.",
            "Achievement, Passion, Leadership",
        ),
        (
            "Share your victories with others. Your natural leadership shines when you mentor and inspire.",
            "Teaching, Sharing, Generosity",
        ),
        (
            "Release impatience and impulsiveness. Make peace with delays and trust the timing of the universe.",
            "Patience, Acceptance, Inner Peace",
        ),
        (
            "Rare quiet time for the Ram. Rest and recharge your fiery spirit before your next adventure.",
            "Solitude, Restoration, Meditation",
        ),
    ],
    // Taurus
    [
        (
            "Plant seeds for financial and material growth. Your practical nature excels at long-term planning now.",
            "Stability, Resources, Foundation",
        ),
        (
            "Slow and steady wins the race. Build towards your goals with your characteristic patience and persistence.",
            "Persistence, Growth, Determination",
        ),
        (
            "Your natural stubbornness becomes strength. Stand firm in your values and commitments.",
            "Values, Commitment, Reliability",
        ),
        (
            "Perfect your plans with attention to detail. Your eye for beauty and quality is heightened.",
            "Refinement, Quality, Aesthetics",
        ),
        (
            "Harvest the fruits of your labor. Indulge in life's pleasures and enjoy your material achievements.",
            "Abundance, Pleasure, Gratitude",
        ),
        (
            "Share your resources and wisdom generously. Your stability helps ground others.",
            "Generosity, Grounding, Support",
        ),
        (
            "Release attachment to material possessions or rigid thinking. Embrace change and flexibility.",
            "Flexibility, Non-attachment, Change",
        ),
        (
            "Indulge in self-care and creature comforts. Pamper yourself as you prepare for renewal.",
            "Self-care, Comfort, Rejuvenation",
        ),
    ],
    // Gemini
    [
        (
            "Set intentions for learning and communication. Start that course, blog, or conversation you've been considering.",
            "Learning, Communication, Curiosity",
        ),
        (
            "Network and connect! Your social butterfly nature is amplified. Make new contacts and exchange ideas.",
            "Networking, Ideas, Connections",
        ),
        (
            "Choose which projects deserve your focus. Your versatile mind needs direction now.",
            "Focus, Decisions, Clarity",
        ),
        (
            "Refine your message and polish your communication. Quality over quantity in your words.",
            "Communication, Refinement, Expression",
        ),
        (
            "Your mind is buzzing with insights! Write, speak, and share your brilliant ideas with the world.",
            "Expression, Insight, Sharing",
        ),
        (
            "Teach what you've learned. Your gift for explanation helps others understand complex concepts.",
            "Teaching, Sharing, Wisdom",
        ),
        (
            "Release mental clutter and overthinking. Practice mindfulness and give your busy mind a rest.",
            "Simplicity, Mindfulness, Clarity",
        ),
        (
            "Quiet the chatter. Enjoy silence and introspection before your next phase of activity.",
            "Silence, Introspection, Peace",
        ),
    ],
    // Cancer
    [
        (
            "Honor your emotions and set intentions for home and family. This lunar energy resonates deeply with you.",
            "Home, Family, Emotional Foundation",
        ),
        (
            "Nurture your dreams like you nurture others. Small acts of self-love build momentum.",
            "Self-nurturing, Growth, Care",
        ),
        (
            "Balance caring for others with caring for yourself. Set healthy emotional boundaries.",
            "Boundaries, Balance, Self-care",
        ),
        (
            "Prepare your emotional foundation. Create a sanctuary at home that supports your well-being.",
            "Sanctuary, Preparation, Comfort",
        ),
        (
            "Your ruling planet reaches full power! Emotions run high—honor them all with compassion.",
            "Emotions, Intuition, Compassion",
        ),
        (
            "Share your nurturing gifts with your community. Your empathy heals others.",
            "Nurturing, Healing, Community",
        ),
        (
            "Release old emotional patterns and family wounds. Forgiveness frees your tender heart.",
            "Forgiveness, Healing, Release",
        ),
        (
            "Retreat into your shell for restoration. Your sensitive soul needs quiet time to recharge.",
            "Solitude, Restoration, Introspection",
        ),
    ],
    // Leo
    [
        (
            "Set intentions for creative expression and leadership. The world needs your unique light.",
            "Creativity, Leadership, Self-expression",
        ),
        (
            "Take center stage in your own life story. Build confidence and let your personality shine.",
            "Confidence, Performance, Joy",
        ),
        (
            "Lead with your heart. Your natural charisma inspires others to follow their dreams too.",
            "Leadership, Inspiration, Heart",
        ),
        (
            "Perfect your craft and polish your presentation. You're preparing for your spotlight moment.",
            "Craft, Excellence, Preparation",
        ),
        (
            "Bask in recognition and celebrate your achievements! Your dramatic flair is perfectly suited to this energy.",
            "Recognition, Celebration, Drama",
        ),
        (
            "Share the spotlight generously. Your warmth and encouragement help others shine too.",
            "Generosity, Encouragement, Warmth",
        ),
        (
            "Release the need for constant applause. Find validation within your own proud heart.",
            "Inner Validation, Humility, Reflection",
        ),
        (
            "Even royalty needs rest. Recharge your radiant energy away from the public eye.",
            "Rest, Privacy, Restoration",
        ),
    ],
    // Virgo
    [
        (
            "Set precise, detailed goals for health and improvement. Your analytical mind thrives in planning mode.",
            "Organization, Health, Improvement",
        ),
        (
            "Take methodical steps towards your goals. Your attention to detail ensures quality progress.",
            "Method, Detail, Quality",
        ),
        (
            "Make practical decisions based on facts and analysis. Trust your discerning judgment.",
            "Practicality, Analysis, Discernment",
        ),
        (
            "Perfect and refine your systems. This is your element—organization and optimization!",
            "Optimization, Systems, Efficiency",
        ),
        (
            "Acknowledge your achievements, even if they seem 'small.' Your consistent effort creates remarkable results.",
            "Achievement, Recognition, Results",
        ),
        (
            "Share your organizational wisdom. Your practical advice helps others bring order to chaos.",
            "Service, Wisdom, Helpfulness",
        ),
        (
            "Release perfectionism and self-criticism. You are enough, exactly as you are.",
            "Self-acceptance, Letting Go, Peace",
        ),
        (
            "Rest your analytical mind. Sometimes not organizing is the ultimate act of self-care.",
            "Rest, Acceptance, Stillness",
        ),
    ],
    // Libra
    [
        (
            "Set intentions for relationships and balance. Envision the harmony you wish to create.",
            "Relationships, Balance, Harmony",
        ),
        (
            "Take steps to create beauty and balance in your environment. Your aesthetic sense guides you.",
            "Beauty, Balance, Aesthetics",
        ),
        (
            "Make decisions in partnerships. Your diplomatic nature helps navigate conflicts gracefully.",
            "Diplomacy, Partnership, Decisions",
        ),
        (
            "Refine your relationships and social connections. Quality interactions over quantity.",
            "Connection, Quality, Refinement",
        ),
        (
            "Relationships reach peak intensity. Balance your needs with others' while maintaining your center.",
            "Relationships, Balance, Fulfillment",
        ),
        (
            "Share your gift for creating harmony. Your mediation skills bring peace to conflicts.",
            "Mediation, Peace, Sharing",
        ),
        (
            "Release codependency and people-pleasing. Your peace shouldn't depend on others' approval.",
            "Independence, Self-worth, Release",
        ),
        (
            "Find balance in solitude. True harmony starts with inner peace, not external validation.",
            "Solitude, Inner Peace, Reflection",
        ),
    ],
    // Scorpio
    [
        (
            "Dive deep into transformation and rebirth. Set powerful intentions for profound personal change.",
            "Transformation, Depth, Rebirth",
        ),
        (
            "Your intense focus drives powerful progress. Channel your passion into meaningful action.",
            "Intensity, Passion, Power",
        ),
        (
            "Face your shadows with courage. Your willpower overcomes any obstacle, internal or external.",
            "Courage, Willpower, Truth",
        ),
        (
            "Prepare for breakthrough. Your investigative nature uncovers hidden truths and opportunities.",
            "Investigation, Discovery, Preparation",
        ),
        (
            "Emotional intensity peaks! Transform raw emotions into creative or spiritual power.",
            "Intensity, Transformation, Power",
        ),
        (
            "Share your hard-won wisdom about transformation. Your depth helps others heal.",
            "Healing, Wisdom, Sharing",
        ),
        (
            "Release control and trust the process. Even Scorpio must surrender sometimes.",
            "Surrender, Trust, Release",
        ),
        (
            "Rest in the darkness—it's your natural element. Spiritual renewal happens in the void.",
            "Darkness, Renewal, Spirituality",
        ),
    ],
    // Sagittarius
    [
        (
            "Set intentions for adventure and expansion. Where will your arrows fly in this new cycle?",
            "Adventure, Growth, Expansion",
        ),
        (
            "Take the first steps on your journey. Your optimism and enthusiasm create momentum.",
            "Optimism, Journey, Enthusiasm",
        ),
        (
            "Commit to your path with confidence. Your philosophical nature finds meaning in challenges.",
            "Commitment, Philosophy, Growth",
        ),
        (
            "Prepare for your next adventure by gathering knowledge and resources. Study and explore!",
            "Learning, Exploration, Preparation",
        ),
        (
            "Your quest reaches a milestone! Celebrate the wisdom gained and vistas explored.",
            "Wisdom, Celebration, Achievement",
        ),
        (
            "Share your adventures and inspire others to expand their horizons. You're a natural teacher!",
            "Teaching, Inspiration, Sharing",
        ),
        (
            "Release rigid beliefs and dogma. Stay open to new perspectives and truths.",
            "Openness, Flexibility, Release",
        ),
        (
            "Even explorers need rest. Recharge before your next grand adventure begins.",
            "Rest, Reflection, Preparation",
        ),
    ],
    // Capricorn
    [
        (
            "Set ambitious long-term goals. Your disciplined nature excels at building lasting structures.",
            "Ambition, Structure, Goals",
        ),
        (
            "Climb your mountain one step at a time. Consistent effort yields substantial results.",
            "Discipline, Progress, Persistence",
        ),
        (
            "Make responsible decisions that honor your commitments. Your integrity is your strength.",
            "Responsibility, Integrity, Commitment",
        ),
        (
            "Refine your professional strategies. Success comes through careful planning and execution.",
            "Strategy, Professionalism, Excellence",
        ),
        (
            "Reach the summit and acknowledge your achievements. Your hard work deserves recognition!",
            "Achievement, Success, Recognition",
        ),
        (
            "Mentor others on their climb. Your experience and wisdom help them avoid pitfalls.",
            "Mentorship, Wisdom, Leadership",
        ),
        (
            "Release workaholism and excessive control. Success means nothing without life balance.",
            "Balance, Release, Perspective",
        ),
        (
            "Rest and reflect on lessons learned. Even mountains need time to settle before the next season.",
            "Rest, Reflection, Restoration",
        ),
    ],
    // Aquarius
    [
        (
            "Envision innovative solutions and social change. Your revolutionary ideas need this fresh start energy.",
            "Innovation, Change, Vision",
        ),
        (
            "Connect with your community and fellow visionaries. Collaboration amplifies your impact.",
            "Community, Collaboration, Progress",
        ),
        (
            "Commit to your unique path, even if others don't understand. Your originality is your gift.",
            "Individuality, Authenticity, Freedom",
        ),
        (
            "Refine your ideas and innovations. Technology and humanitarian efforts align perfectly now.",
            "Innovation, Refinement, Technology",
        ),
        (
            "Your revolutionary ideas reach full expression! Share your vision for a better future.",
            "Revolution, Vision, Expression",
        ),
        (
            "Share your knowledge freely with humanity. Your progressive ideas inspire collective evolution.",
            "Sharing, Progress, Humanity",
        ),
        (
            "Release detachment and intellectualization. Connect with your emotions and heart.",
            "Emotion, Connection, Vulnerability",
        ),
        (
            "Process your experiences in solitude. Even the Water Bearer needs to refill their own cup.",
            "Solitude, Processing, Renewal",
        ),
    ],
    // Pisces
    [
        (
            "Set intentions through meditation and dreams. Your intuitive nature receives cosmic downloads now.",
            "Intuition, Dreams, Spirituality",
        ),
        (
            "Trust your creative and spiritual impulses. Let your imagination guide your next steps.",
            "Creativity, Imagination, Trust",
        ),
        (
            "Balance dreams with practical action. Your compassion needs grounded expression.",
            "Balance, Compassion, Action",
        ),
        (
            "Refine your artistic or spiritual practice. Your connection to the divine deepens through dedication.",
            "Art, Spirituality, Practice",
        ),
        (
            "Your psychic abilities peak! Trust your visions and honor your deep emotional wisdom.",
            "Psychic Ability, Emotion, Wisdom",
        ),
        (
            "Share your spiritual gifts and artistic creations. Your empathy heals collective wounds.",
            "Healing, Art, Empathy",
        ),
        (
            "Release victim mentality and escapism. Ground your spiritual insights in reality.",
            "Grounding, Reality, Release",
        ),
        (
            "Merge with the cosmic ocean through rest and meditation. This is your most natural state.",
            "Meditation, Surrender, Oneness",
        ),
    ],
];

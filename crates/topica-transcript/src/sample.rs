/// Demo transcript shown by `topica sample` and used by `topica split --sample`.
///
/// Five exchanges about launching a SaaS product: two on pricing, then
/// competitors, free trials and the first sales hires.
pub const SAMPLE_TRANSCRIPT: &str = r#"User: How should I price my new SaaS product?
Assistant: For SaaS pricing, consider value-based pricing. Analyze what value your product provides to customers and price accordingly. Research shows companies using value-based pricing grow 20% faster. Start with 3 pricing tiers: Basic, Professional, and Enterprise.

User: What's a good starting price point?
Assistant: For B2B SaaS, typical starting prices range from $29-99/month for basic plans. Consider your customer acquisition cost (CAC) and lifetime value (LTV). Your price should allow for a healthy LTV:CAC ratio of at least 3:1.

User: How do I analyze competitors?
Assistant: Start by identifying your top 5 competitors. Create a spreadsheet comparing: pricing models, features, target customers, and positioning. Use tools like SimilarWeb to estimate their traffic and market share. Look at their review sites like G2 and Capterra to understand customer pain points.

User: Should I offer a free trial?
Assistant: Yes, free trials are standard in SaaS. 14-day trials are most common. Studies show 30-day trials don't significantly increase conversion rates. Require a credit card for higher-quality leads, or offer "freemium" to maximize top-of-funnel.

User: How do I structure my early sales team?
Assistant: For early-stage startups, start with founder-led sales. Once you hit $100K ARR, hire your first Account Executive. At $500K ARR, add a Sales Development Rep (SDR) for lead qualification. Don't hire a VP of Sales until you've proven the sales process works and hit $1-2M ARR."#;

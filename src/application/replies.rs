//! Canned assistant replies.

pub const WELCOME: &str = "👋 Hey! I'm Trix, your Algorand assistant. I can mint tokens and NFTs, \
send ALGO, work with NFD names, fetch token prices, and explore the ecosystem. What would you \
like to do?";

pub const HELP: &str = "Here's what I can help with:\n\
- 🎨 Mint a fungible token or an NFT\n\
- 💸 Send ALGO or transfer a token\n\
- 🔄 Swap native or token assets\n\
- 📛 Resolve, look up, list, or mint NFD names\n\
- 🌉 Cross-chain transfers and peer setup\n\
- 💱 Token price quotes\n\
- 🌐 Search Algorand ecosystem projects\n\n\
Just tell me what you'd like to do.";

pub const UNRECOGNIZED: &str = "🤔 I didn't quite catch that. Try something like `mint a token`, \
`send algo`, `myname.algo`, or `show me wallet projects`.";

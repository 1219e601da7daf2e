//! Static operation descriptors.
//!
//! One table per operation kind: the ordered slots, whether a connected
//! wallet is required, and whether the flow ends in a yes/no
//! confirmation. Read-only lookups skip confirmation and run as soon as
//! their last slot is filled.

use crate::domain::foundation::NfdView;

use super::{OperationKind, SlotDefault, SlotKind, SlotSpec};

/// Static description of one operation flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationDescriptor {
    pub kind: OperationKind,
    /// Opening line emitted when the flow starts fresh.
    pub intro: &'static str,
    pub slots: &'static [SlotSpec],
    /// State-mutating flows refuse to start without a connected wallet.
    pub requires_wallet: bool,
    /// Whether a final yes/no confirmation precedes the action.
    pub confirm: bool,
}

const fn prompted(name: &'static str, prompt: &'static str, kind: SlotKind) -> SlotSpec {
    SlotSpec {
        name,
        prompt,
        kind,
        default: SlotDefault::None,
        prompted: true,
    }
}

const fn with_default(
    name: &'static str,
    prompt: &'static str,
    kind: SlotKind,
    default: SlotDefault,
) -> SlotSpec {
    SlotSpec {
        name,
        prompt,
        kind,
        default,
        prompted: true,
    }
}

const fn implicit(name: &'static str, kind: SlotKind, default: SlotDefault) -> SlotSpec {
    SlotSpec {
        name,
        prompt: "",
        kind,
        default,
        prompted: false,
    }
}

static MINT_FUNGIBLE_TOKEN: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::MintFungibleToken,
    intro: "Let's create your personalized fungible token 🎨",
    slots: &[
        prompted(
            "unit_name",
            "First, what short symbol should we use (unit name)? Example: `RP` for Royalty Points.",
            SlotKind::FreeText { max_len: 8 },
        ),
        prompted(
            "asset_name",
            "Now, give your token a full name (asset name). Example: `Royalty Points`",
            SlotKind::FreeText { max_len: 32 },
        ),
        prompted(
            "total_supply",
            "How many tokens in total supply should we mint? Example: `1000000`",
            SlotKind::UInt { min: 1, max: u64::MAX },
        ),
        prompted(
            "decimals",
            "Lastly, how many decimals should your token have? Example: `6` (common for micro-units)",
            SlotKind::UInt { min: 0, max: 19 },
        ),
    ],
    requires_wallet: true,
    confirm: true,
};

static MINT_NFT: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::MintNft,
    intro: "Let's mint an NFT together 🖼️",
    slots: &[
        prompted(
            "asset_name",
            "What should the NFT be called?",
            SlotKind::FreeText { max_len: 32 },
        ),
        with_default(
            "image_url",
            "Share an image or metadata URL for the NFT (IPFS or https), or press enter to skip.",
            SlotKind::FreeText { max_len: 200 },
            SlotDefault::Text(""),
        ),
    ],
    requires_wallet: true,
    confirm: true,
};

static TRANSFER_NATIVE: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::TransferNative,
    intro: "Let's send some ALGO 💸",
    slots: &[
        prompted(
            "receiver",
            "Please share the receiver address.",
            SlotKind::Address,
        ),
        prompted("amount", "How much ALGO do you want to send?", SlotKind::Amount),
    ],
    requires_wallet: true,
    confirm: true,
};

static TRANSFER_ASSET: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::TransferAsset,
    intro: "Let's transfer a token 🔁",
    slots: &[
        prompted(
            "receiver",
            "Please share the receiver address.",
            SlotKind::Address,
        ),
        prompted(
            "asset_id",
            "Got the address! Now share the Asset ID of the token you want to transfer.",
            SlotKind::UInt { min: 1, max: u64::MAX },
        ),
        prompted(
            "amount",
            "How many whole units of this token do you want to send?",
            SlotKind::UInt { min: 1, max: u64::MAX },
        ),
    ],
    requires_wallet: true,
    confirm: true,
};

static SWAP: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::Swap,
    intro: "Let's set up a swap 🔄",
    slots: &[
        prompted(
            "swap_type",
            "Which swap type do you want?\n1️⃣ Native Swap (native)\n2️⃣ Token Swap (token)",
            SlotKind::Choice {
                options: &["native", "token"],
            },
        ),
        prompted(
            "token_id",
            "Please provide the Token ID.",
            SlotKind::UInt { min: 1, max: u64::MAX },
        ),
        prompted(
            "amount",
            "How many tokens would you like to swap?",
            SlotKind::Amount,
        ),
    ],
    requires_wallet: true,
    confirm: true,
};

static RESOLVE_NFD_NAME: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::ResolveNfdName,
    intro: "",
    slots: &[
        prompted(
            "address",
            "Which Algorand address should I resolve to an NFD name?",
            SlotKind::Address,
        ),
        implicit("view", SlotKind::View, SlotDefault::View(NfdView::Brief)),
    ],
    requires_wallet: false,
    confirm: false,
};

static REVERSE_LOOKUP_NFD: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::ReverseLookupNfd,
    intro: "",
    slots: &[
        prompted(
            "name_or_id",
            "Which NFD name (e.g., myname.algo) or numeric ID should I look up?",
            SlotKind::NfdNameOrId,
        ),
        implicit("view", SlotKind::View, SlotDefault::View(NfdView::Brief)),
    ],
    requires_wallet: false,
    confirm: false,
};

static GET_ALL_NFDS: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::GetAllNfdsForAddress,
    intro: "",
    slots: &[prompted(
        "address",
        "Which address should I list all NFDs for?",
        SlotKind::Address,
    )],
    requires_wallet: false,
    confirm: false,
};

static MINT_NFD_NAME: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::MintNfdName,
    intro: "Let's register an NFD name 📛",
    slots: &[
        prompted(
            "name",
            "Which NFD name would you like to register? (must end in .algo)",
            SlotKind::NfdName,
        ),
        prompted(
            "years",
            "How many years should the registration last? (1-10)",
            SlotKind::UInt { min: 1, max: 10 },
        ),
        with_default(
            "reserved_for",
            "Which address should the name be reserved for? Press enter to use your connected address.",
            SlotKind::Address,
            SlotDefault::CallerAddress,
        ),
    ],
    requires_wallet: true,
    confirm: true,
};

static MINT_NFD_NAME_NFT: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::MintNfdNameNft,
    intro: "Let's mint an NFD name NFT 📛",
    slots: &[
        prompted(
            "name",
            "Which NFD name should the NFT represent? (must end in .algo)",
            SlotKind::NfdName,
        ),
        prompted(
            "years",
            "How many years should the registration last? (1-10)",
            SlotKind::UInt { min: 1, max: 10 },
        ),
        with_default(
            "link_on_mint",
            "Link the NFD to your account on mint? (yes/no, default yes)",
            SlotKind::Bool,
            SlotDefault::Bool(true),
        ),
    ],
    requires_wallet: true,
    confirm: true,
};

static CROSS_CHAIN_TRANSFER: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::CrossChainTransfer,
    intro: "I'll help you send tokens across chains 🌉",
    slots: &[
        prompted(
            "src_chain_id",
            "Which chain would you like to send from? (please provide the chain ID)",
            SlotKind::UInt { min: 1, max: u64::MAX },
        ),
        prompted(
            "dest_chain_id",
            "Which chain would you like to send to? (please provide the destination chain ID)",
            SlotKind::UInt { min: 1, max: u64::MAX },
        ),
        prompted(
            "amount",
            "How many tokens would you like to send?",
            SlotKind::Amount,
        ),
        prompted(
            "receiver",
            "What's the receiving wallet address? (please provide the 0x address)",
            SlotKind::HexAddress,
        ),
    ],
    requires_wallet: true,
    confirm: true,
};

static CROSS_CHAIN_SET_PEER: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::CrossChainSetPeer,
    intro: "I'll help you set up peers between chains 🌉",
    slots: &[
        prompted(
            "src_chain_id",
            "What's the source chain ID?",
            SlotKind::UInt { min: 1, max: u64::MAX },
        ),
        prompted(
            "dest_chain_id",
            "What's the destination chain ID?",
            SlotKind::UInt { min: 1, max: u64::MAX },
        ),
    ],
    requires_wallet: true,
    confirm: true,
};

static GET_QUOTES: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::GetQuotes,
    intro: "",
    slots: &[prompted(
        "tickers",
        "Please give me the tickers for which you want token details (e.g., `btc, eth, sol`).",
        SlotKind::Tickers,
    )],
    requires_wallet: false,
    confirm: false,
};

static SEARCH_PROJECTS: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::SearchProjects,
    intro: "",
    slots: &[prompted(
        "query",
        "What are you looking for in the Algorand ecosystem? (e.g., wallets, DEXs, SDKs)",
        SlotKind::FreeText { max_len: 100 },
    )],
    requires_wallet: false,
    confirm: false,
};

/// Looks up the static descriptor for an operation kind.
pub fn descriptor(kind: OperationKind) -> &'static OperationDescriptor {
    match kind {
        OperationKind::MintFungibleToken => &MINT_FUNGIBLE_TOKEN,
        OperationKind::MintNft => &MINT_NFT,
        OperationKind::TransferNative => &TRANSFER_NATIVE,
        OperationKind::TransferAsset => &TRANSFER_ASSET,
        OperationKind::Swap => &SWAP,
        OperationKind::ResolveNfdName => &RESOLVE_NFD_NAME,
        OperationKind::ReverseLookupNfd => &REVERSE_LOOKUP_NFD,
        OperationKind::GetAllNfdsForAddress => &GET_ALL_NFDS,
        OperationKind::MintNfdName => &MINT_NFD_NAME,
        OperationKind::MintNfdNameNft => &MINT_NFD_NAME_NFT,
        OperationKind::CrossChainTransfer => &CROSS_CHAIN_TRANSFER,
        OperationKind::CrossChainSetPeer => &CROSS_CHAIN_SET_PEER,
        OperationKind::GetQuotes => &GET_QUOTES,
        OperationKind::SearchProjects => &SEARCH_PROJECTS,
    }
}

pub const CAPABILITY_REF: &str = "ipfs://bafybeigdyrzt5agentcard/agent-card.json";
pub const UPDATED_CAPABILITY_REF: &str = "ipfs://bafybeigdyrzt5agentcard/agent-card-v2.json";
pub const STATE_PAYLOAD: &[u8] = b"observation batch 0017, checkpoint sha included";
pub const EXEC_PAYLOAD: &[u8] = b"run: summarize inbox since monday";

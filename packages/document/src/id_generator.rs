use crc32fast::Hasher;

/// Generate a session seed from a session name using CRC32
pub fn get_session_id(name: &str) -> String {
    let mut buff = String::from(name);
    if !name.starts_with("mailblock://") {
        buff = format!("mailblock://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for blocks created in one editing session
#[derive(Debug, Clone)]
pub struct IDGenerator {
    seed: String, // Session ID (CRC32)
    count: u64,   // Sequential counter
}

impl IDGenerator {
    pub fn new(session: &str) -> Self {
        Self {
            seed: get_session_id(session),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Generate the next ID for which `in_use` returns false
    pub fn new_id_excluding(&mut self, in_use: impl Fn(&str) -> bool) -> String {
        loop {
            let id = self.new_id();
            if !in_use(&id) {
                return id;
            }
        }
    }

    /// Get session ID seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IDGenerator {
    fn default() -> Self {
        Self::new("default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_generation() {
        let id1 = get_session_id("newsletter");
        let id2 = get_session_id("newsletter");

        // Same name always generates same seed
        assert_eq!(id1, id2);

        // Different names generate different seeds
        let id3 = get_session_id("receipt");
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IDGenerator::new("test");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        let seed = gen.seed();
        assert!(id1.starts_with(seed));
        assert!(id3.starts_with(seed));
    }

    #[test]
    fn test_excluding_skips_taken_ids() {
        let mut gen = IDGenerator::from_seed("blk".to_string());
        let id = gen.new_id_excluding(|id| id == "blk-1" || id == "blk-2");
        assert_eq!(id, "blk-3");
    }
}

use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageType {
    #[default]
    #[display("local storage")]
    LocalStorage,
    #[display("session storage")]
    SessionStorage,
}

impl StorageType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "local" => Some(Self::LocalStorage),
            "session" => Some(Self::SessionStorage),
            _ => None,
        }
    }

    fn open(self) -> anyhow::Result<web_sys::Storage> {
        let Some(window) = web_sys::window() else {
            anyhow::bail!("window not available");
        };

        let storage = match self {
            Self::LocalStorage => window.local_storage(),
            Self::SessionStorage => window.session_storage(),
        };

        let Ok(Some(storage)) = storage else {
            anyhow::bail!("no {self} available");
        };

        Ok(storage)
    }
}

pub fn get_item(storage_type: StorageType, key: &str) -> anyhow::Result<Option<String>> {
    storage_type
        .open()?
        .get_item(key)
        .map_err(|err| anyhow::anyhow!("failed to read {key} from {storage_type}: {err:?}"))
}

pub fn set_item(storage_type: StorageType, key: &str, value: &str) -> anyhow::Result<()> {
    storage_type
        .open()?
        .set_item(key, value)
        .map_err(|err| anyhow::anyhow!("failed to save {key} to {storage_type}: {err:?}"))
}

pub fn remove_item(storage_type: StorageType, key: &str) -> anyhow::Result<()> {
    storage_type
        .open()?
        .remove_item(key)
        .map_err(|err| anyhow::anyhow!("failed to remove {key} from {storage_type}: {err:?}"))
}

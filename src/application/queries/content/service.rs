use std::sync::Arc;

use crate::{application::access::AccessResolver, domain::content::ContentReadRepository};

pub struct ContentQueryService {
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) access: Arc<AccessResolver>,
}

impl ContentQueryService {
    pub fn new(read_repo: Arc<dyn ContentReadRepository>, access: Arc<AccessResolver>) -> Self {
        Self { read_repo, access }
    }
}

pub mod award;
pub mod contractor;
pub mod enrichment;
pub mod office;

pub use award::{AlternativeSearchOption, AwardRecord, RawAward, SearchCriteria, SearchSummary};
pub use contractor::{ContractorRecord, ContractorTier};
pub use enrichment::{BudgetTrend, CommandInfo, EnrichmentResult, SmallBusinessContact, TrendDirection};
pub use office::{OfficeAggregate, office_key};

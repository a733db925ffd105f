//! NEREL-BIO relation vocabulary.
//!
//! The token set reproduces the upstream annotation schema verbatim. Some
//! entries look like near-duplicates (`MEDICAL_CONDITION` next to
//! `FINDING_OF`, the general `VALUE_IS` next to the biomedical `DOSE_IS`);
//! those are corpus artifacts and must stay distinct. Do not merge them
//! without confirming against the upstream schema.

use crate::labels::{Label, LabelFormatter};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A NEREL-BIO relation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RelationType {
    /// `ABBREVIATION`
    Abbreviation,
    /// `ALTERNATIVE_NAME`
    AlternativeName,
    /// `KNOWS`
    Knows,
    /// `AGE_IS`
    AgeIs,
    /// `AGE_DIED_AT`
    AgeDiedAt,
    /// `AWARDED_WITH`
    AwardedWith,
    /// `PLACE_OF_BIRTH`
    PlaceOfBirth,
    /// `DATE_DEFUNCT_IN`
    DateDefunctIn,
    /// `DATE_FOUNDED_IN`
    DateFoundedIn,
    /// `DATE_OF_BIRTH`
    DateOfBirth,
    /// `DATE_OF_CREATION`
    DateOfCreation,
    /// `DATE_OF_DEATH`
    DateOfDeath,
    /// `POINT_IN_TIME`
    PointInTime,
    /// `PLACE_OF_DEATH`
    PlaceOfDeath,
    /// `FOUNDED_BY`
    FoundedBy,
    /// `HEADQUARTERED_IN`
    HeadquarteredIn,
    /// `IDEOLOGY_OF`
    IdeologyOf,
    /// `SPOUSE`
    Spouse,
    /// `MEMBER_OF`
    MemberOf,
    /// `ORGANIZES`
    Organizes,
    /// `OWNER_OF`
    OwnerOf,
    /// `PARENT_OF`
    ParentOf,
    /// `PARTICIPANT_IN`
    ParticipantIn,
    /// `PLACE_RESIDES_IN`
    PlaceResidesIn,
    /// `PRICE_OF`
    PriceOf,
    /// `PRODUCES`
    Produces,
    /// `RELATIVE`
    Relative,
    /// `RELIGION_OF`
    ReligionOf,
    /// `SCHOOLS_ATTENDED`
    SchoolsAttended,
    /// `SIBLING`
    Sibling,
    /// `SUBEVENT_OF`
    SubeventOf,
    /// `SUBORDINATE_OF`
    SubordinateOf,
    /// `TAKES_PLACE_IN`
    TakesPlaceIn,
    /// `WORKPLACE`
    Workplace,
    /// `WORKS_AS`
    WorksAs,
    /// `CONVICTED_OF`
    ConvictedOf,
    /// `PENALIZED_AS`
    PenalizedAs,
    /// `START_TIME`
    StartTime,
    /// `END_TIME`
    EndTime,
    /// `EXPENDITURE`
    Expenditure,
    /// `AGENT`
    Agent,
    /// `INANIMATE_INVOLVED`
    InanimateInvolved,
    /// `INCOME`
    Income,
    /// `SUBCLASS_OF`
    SubclassOf,
    /// `PART_OF`
    PartOf,
    /// `LOCATED_IN`
    LocatedIn,
    /// `TREATED_USING`
    TreatedUsing,
    /// `ORIGINS_FROM`
    OriginsFrom,
    /// `TO_DETECT_OR_STUDY`
    ToDetectOrStudy,
    /// `AFFECTS`
    Affects,
    /// `HAS_CAUSE`
    HasCause,
    /// `APPLIED_TO`
    AppliedTo,
    /// `USED_IN`
    UsedIn,
    /// `ASSOCIATED_WITH`
    AssociatedWith,
    /// `HAS_ADMINISTRATION_ROUTE`
    HasAdministrationRoute,
    /// `HAS_STRENGTH`
    HasStrength,
    /// `DURATION_OF`
    DurationOf,
    /// `VALUE_IS`
    ValueIs,
    /// `PHYSIOLOGY_OF`
    PhysiologyOf,
    /// `PROCEDURE_PERFORMED`
    ProcedurePerformed,
    /// `MENTAL_PROCESS_OF`
    MentalProcessOf,
    /// `MEDICAL_CONDITION`
    MedicalCondition,
    /// `DOSE_IS`
    DoseIs,
    /// `FINDING_OF`
    FindingOf,
    /// `CAUSE_OF_DEATH`
    CauseOfDeath,
    /// `CONSUME`
    Consume,
}

impl RelationType {
    /// All relation types, in upstream schema order.
    pub const ALL: &'static [RelationType] = &[
    RelationType::Abbreviation,
    RelationType::AlternativeName,
    RelationType::Knows,
    RelationType::AgeIs,
    RelationType::AgeDiedAt,
    RelationType::AwardedWith,
    RelationType::PlaceOfBirth,
    RelationType::DateDefunctIn,
    RelationType::DateFoundedIn,
    RelationType::DateOfBirth,
    RelationType::DateOfCreation,
    RelationType::DateOfDeath,
    RelationType::PointInTime,
    RelationType::PlaceOfDeath,
    RelationType::FoundedBy,
    RelationType::HeadquarteredIn,
    RelationType::IdeologyOf,
    RelationType::Spouse,
    RelationType::MemberOf,
    RelationType::Organizes,
    RelationType::OwnerOf,
    RelationType::ParentOf,
    RelationType::ParticipantIn,
    RelationType::PlaceResidesIn,
    RelationType::PriceOf,
    RelationType::Produces,
    RelationType::Relative,
    RelationType::ReligionOf,
    RelationType::SchoolsAttended,
    RelationType::Sibling,
    RelationType::SubeventOf,
    RelationType::SubordinateOf,
    RelationType::TakesPlaceIn,
    RelationType::Workplace,
    RelationType::WorksAs,
    RelationType::ConvictedOf,
    RelationType::PenalizedAs,
    RelationType::StartTime,
    RelationType::EndTime,
    RelationType::Expenditure,
    RelationType::Agent,
    RelationType::InanimateInvolved,
    RelationType::Income,
    RelationType::SubclassOf,
    RelationType::PartOf,
    RelationType::LocatedIn,
    RelationType::TreatedUsing,
    RelationType::OriginsFrom,
    RelationType::ToDetectOrStudy,
    RelationType::Affects,
    RelationType::HasCause,
    RelationType::AppliedTo,
    RelationType::UsedIn,
    RelationType::AssociatedWith,
    RelationType::HasAdministrationRoute,
    RelationType::HasStrength,
    RelationType::DurationOf,
    RelationType::ValueIs,
    RelationType::PhysiologyOf,
    RelationType::ProcedurePerformed,
    RelationType::MentalProcessOf,
    RelationType::MedicalCondition,
    RelationType::DoseIs,
    RelationType::FindingOf,
    RelationType::CauseOfDeath,
    RelationType::Consume,
    ];
}

impl Label for RelationType {
    fn as_token(&self) -> &'static str {
        match self {
            RelationType::Abbreviation => "ABBREVIATION",
            RelationType::AlternativeName => "ALTERNATIVE_NAME",
            RelationType::Knows => "KNOWS",
            RelationType::AgeIs => "AGE_IS",
            RelationType::AgeDiedAt => "AGE_DIED_AT",
            RelationType::AwardedWith => "AWARDED_WITH",
            RelationType::PlaceOfBirth => "PLACE_OF_BIRTH",
            RelationType::DateDefunctIn => "DATE_DEFUNCT_IN",
            RelationType::DateFoundedIn => "DATE_FOUNDED_IN",
            RelationType::DateOfBirth => "DATE_OF_BIRTH",
            RelationType::DateOfCreation => "DATE_OF_CREATION",
            RelationType::DateOfDeath => "DATE_OF_DEATH",
            RelationType::PointInTime => "POINT_IN_TIME",
            RelationType::PlaceOfDeath => "PLACE_OF_DEATH",
            RelationType::FoundedBy => "FOUNDED_BY",
            RelationType::HeadquarteredIn => "HEADQUARTERED_IN",
            RelationType::IdeologyOf => "IDEOLOGY_OF",
            RelationType::Spouse => "SPOUSE",
            RelationType::MemberOf => "MEMBER_OF",
            RelationType::Organizes => "ORGANIZES",
            RelationType::OwnerOf => "OWNER_OF",
            RelationType::ParentOf => "PARENT_OF",
            RelationType::ParticipantIn => "PARTICIPANT_IN",
            RelationType::PlaceResidesIn => "PLACE_RESIDES_IN",
            RelationType::PriceOf => "PRICE_OF",
            RelationType::Produces => "PRODUCES",
            RelationType::Relative => "RELATIVE",
            RelationType::ReligionOf => "RELIGION_OF",
            RelationType::SchoolsAttended => "SCHOOLS_ATTENDED",
            RelationType::Sibling => "SIBLING",
            RelationType::SubeventOf => "SUBEVENT_OF",
            RelationType::SubordinateOf => "SUBORDINATE_OF",
            RelationType::TakesPlaceIn => "TAKES_PLACE_IN",
            RelationType::Workplace => "WORKPLACE",
            RelationType::WorksAs => "WORKS_AS",
            RelationType::ConvictedOf => "CONVICTED_OF",
            RelationType::PenalizedAs => "PENALIZED_AS",
            RelationType::StartTime => "START_TIME",
            RelationType::EndTime => "END_TIME",
            RelationType::Expenditure => "EXPENDITURE",
            RelationType::Agent => "AGENT",
            RelationType::InanimateInvolved => "INANIMATE_INVOLVED",
            RelationType::Income => "INCOME",
            RelationType::SubclassOf => "SUBCLASS_OF",
            RelationType::PartOf => "PART_OF",
            RelationType::LocatedIn => "LOCATED_IN",
            RelationType::TreatedUsing => "TREATED_USING",
            RelationType::OriginsFrom => "ORIGINS_FROM",
            RelationType::ToDetectOrStudy => "TO_DETECT_OR_STUDY",
            RelationType::Affects => "AFFECTS",
            RelationType::HasCause => "HAS_CAUSE",
            RelationType::AppliedTo => "APPLIED_TO",
            RelationType::UsedIn => "USED_IN",
            RelationType::AssociatedWith => "ASSOCIATED_WITH",
            RelationType::HasAdministrationRoute => "HAS_ADMINISTRATION_ROUTE",
            RelationType::HasStrength => "HAS_STRENGTH",
            RelationType::DurationOf => "DURATION_OF",
            RelationType::ValueIs => "VALUE_IS",
            RelationType::PhysiologyOf => "PHYSIOLOGY_OF",
            RelationType::ProcedurePerformed => "PROCEDURE_PERFORMED",
            RelationType::MentalProcessOf => "MENTAL_PROCESS_OF",
            RelationType::MedicalCondition => "MEDICAL_CONDITION",
            RelationType::DoseIs => "DOSE_IS",
            RelationType::FindingOf => "FINDING_OF",
            RelationType::CauseOfDeath => "CAUSE_OF_DEATH",
            RelationType::Consume => "CONSUME",
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

/// Token table, built once at first use.
static TOKEN_TABLE: Lazy<HashMap<&'static str, RelationType>> = Lazy::new(|| {
    RelationType::ALL.iter().map(|r| (r.as_token(), *r)).collect()
});

/// Formatter over the full NEREL-BIO relation vocabulary.
#[derive(Debug, Default, Clone, Copy)]
pub struct NerelBioLabelFormatter;

impl LabelFormatter<RelationType> for NerelBioLabelFormatter {
    fn try_format(&self, token: &str) -> Option<RelationType> {
        TOKEN_TABLE.get(token).copied()
    }
}

//! Prime and tier-2 contractor rosters.
//!
//! Contact fields are deliberately uneven — ranking by contact completeness
//! is part of the suggestion contract, so the rosters preserve which firms
//! actually publish a small-business inbox, phone line, or liaison.

use fedlead_core::{ContractorRecord, ContractorTier};

struct Row {
    name: &'static str,
    tier: ContractorTier,
    naics: &'static [&'static str],
    specialties: &'static [&'static str],
    agencies: &'static [&'static str],
    email: Option<&'static str>,
    phone: Option<&'static str>,
    liaison: Option<&'static str>,
    portal: Option<&'static str>,
    website: Option<&'static str>,
}

impl Row {
    fn build(&self) -> ContractorRecord {
        ContractorRecord {
            name: self.name.to_string(),
            tier: self.tier,
            naics_codes: self.naics.iter().map(|s| s.to_string()).collect(),
            specialties: self.specialties.iter().map(|s| s.to_string()).collect(),
            agencies: self.agencies.iter().map(|s| s.to_string()).collect(),
            email: self.email.map(str::to_string),
            phone: self.phone.map(str::to_string),
            sb_liaison: self.liaison.map(str::to_string),
            supplier_portal: self.portal.map(str::to_string),
            website: self.website.map(str::to_string),
        }
    }
}

use ContractorTier::{Prime, Tier2};

const PRIMES: &[Row] = &[
    Row {
        name: "Lockheed Martin Corporation",
        tier: Prime,
        naics: &["336411", "336414", "541712"],
        specialties: &["aircraft systems", "missiles", "software development"],
        agencies: &["Department of Defense", "Department of the Air Force", "NASA"],
        email: Some("smallbusiness.lm@lmco.com"),
        phone: Some("301-897-6000"),
        liaison: Some("Supplier Diversity Office"),
        portal: Some("https://www.lockheedmartin.com/suppliers"),
        website: Some("https://www.lockheedmartin.com"),
    },
    Row {
        name: "RTX Corporation",
        tier: Prime,
        naics: &["336412", "334511"],
        specialties: &["propulsion", "sensors", "missiles"],
        agencies: &["Department of Defense", "Department of the Navy"],
        email: Some("supplier.diversity@rtx.com"),
        phone: Some("781-522-3000"),
        liaison: None,
        portal: Some("https://www.rtx.com/suppliers"),
        website: Some("https://www.rtx.com"),
    },
    Row {
        name: "The Boeing Company",
        tier: Prime,
        naics: &["336411", "336413"],
        specialties: &["aircraft systems", "space systems"],
        agencies: &["Department of the Air Force", "NASA", "Department of the Navy"],
        email: None,
        phone: Some("703-465-3500"),
        liaison: Some("Supplier Diversity Office"),
        portal: Some("https://www.boeingsuppliers.com"),
        website: Some("https://www.boeing.com"),
    },
    Row {
        name: "General Dynamics Corporation",
        tier: Prime,
        naics: &["336611", "336992", "541512"],
        specialties: &["shipbuilding", "ground vehicles", "IT services"],
        agencies: &["Department of the Navy", "Department of the Army"],
        email: Some("smallbusiness@gd.com"),
        phone: Some("703-876-3000"),
        liaison: Some("Small Business Programs Office"),
        portal: Some("https://www.gd.com/suppliers"),
        website: Some("https://www.gd.com"),
    },
    Row {
        name: "Northrop Grumman Corporation",
        tier: Prime,
        naics: &["336414", "334511", "541712"],
        specialties: &["space systems", "C4ISR", "cybersecurity"],
        agencies: &["Department of Defense", "Department of the Air Force"],
        email: Some("oasis@ngc.com"),
        phone: None,
        liaison: Some("Global Supplier Diversity"),
        portal: Some("https://www.northropgrumman.com/suppliers"),
        website: Some("https://www.northropgrumman.com"),
    },
    Row {
        name: "L3Harris Technologies Inc",
        tier: Prime,
        naics: &["334220", "334511"],
        specialties: &["tactical communications", "avionics", "sensors"],
        agencies: &["Department of Defense", "Department of the Army"],
        email: Some("supplier.diversity@l3harris.com"),
        phone: Some("321-727-9100"),
        liaison: None,
        portal: None,
        website: Some("https://www.l3harris.com"),
    },
    Row {
        name: "BAE Systems Inc",
        tier: Prime,
        naics: &["336992", "334511"],
        specialties: &["combat vehicles", "electronic warfare", "ship repair"],
        agencies: &["Department of the Army", "Department of the Navy"],
        email: None,
        phone: Some("703-312-6100"),
        liaison: None,
        portal: Some("https://www.baesystems.com/en-us/partner"),
        website: Some("https://www.baesystems.com"),
    },
    Row {
        name: "Leidos Holdings Inc",
        tier: Prime,
        naics: &["541512", "541330", "541714"],
        specialties: &["IT modernization", "health IT", "systems engineering"],
        agencies: &["Defense Information Systems Agency", "Department of Veterans Affairs", "Department of Homeland Security"],
        email: Some("smallbusinessoffice@leidos.com"),
        phone: Some("571-526-6000"),
        liaison: Some("Small Business Programs Office"),
        portal: Some("https://www.leidos.com/suppliers"),
        website: Some("https://www.leidos.com"),
    },
    Row {
        name: "Booz Allen Hamilton Inc",
        tier: Prime,
        naics: &["541512", "541611", "541690"],
        specialties: &["consulting", "data analytics", "cybersecurity"],
        agencies: &["Department of Defense", "Department of Health and Human Services"],
        email: Some("small_business@bah.com"),
        phone: Some("703-902-5000"),
        liaison: Some("Small Business Liaison Office"),
        portal: None,
        website: Some("https://www.boozallen.com"),
    },
    Row {
        name: "SAIC Inc",
        tier: Prime,
        naics: &["541512", "541330"],
        specialties: &["IT services", "systems integration", "training services"],
        agencies: &["Department of Defense", "NASA", "Department of State"],
        email: Some("smallbusiness@saic.com"),
        phone: None,
        liaison: None,
        portal: Some("https://www.saic.com/suppliers"),
        website: Some("https://www.saic.com"),
    },
    Row {
        name: "Jacobs Engineering Group",
        tier: Prime,
        naics: &["541330", "562910", "236220"],
        specialties: &["engineering services", "environmental remediation", "construction management"],
        agencies: &["U.S. Army Corps of Engineers", "NASA", "Department of Energy"],
        email: None,
        phone: Some("214-638-0145"),
        liaison: None,
        portal: None,
        website: Some("https://www.jacobs.com"),
    },
    Row {
        name: "AECOM",
        tier: Prime,
        naics: &["541330", "237990", "562910"],
        specialties: &["infrastructure design", "construction", "environmental remediation"],
        agencies: &["U.S. Army Corps of Engineers", "Naval Facilities Engineering Systems Command"],
        email: Some("smallbusiness@aecom.com"),
        phone: Some("213-593-8000"),
        liaison: Some("Small Business Advocate"),
        portal: None,
        website: Some("https://www.aecom.com"),
    },
];

const TIER2: &[Row] = &[
    Row {
        name: "Gibbs & Cox Inc",
        tier: Tier2,
        naics: &["541330"],
        specialties: &["naval architecture", "marine engineering"],
        agencies: &["Department of the Navy"],
        email: Some("info@gibbscox.com"),
        phone: Some("703-416-3600"),
        liaison: None,
        portal: None,
        website: Some("https://www.gibbscox.com"),
    },
    Row {
        name: "Tyonek Native Corporation",
        tier: Tier2,
        naics: &["336413", "541512"],
        specialties: &["aircraft modification", "maintenance and sustainment"],
        agencies: &["Department of the Army", "Department of the Air Force"],
        email: Some("bd@tyonek.com"),
        phone: Some("256-461-8291"),
        liaison: None,
        portal: None,
        website: Some("https://www.tyonek.com"),
    },
    Row {
        name: "Sev1Tech LLC",
        tier: Tier2,
        naics: &["541512", "541519"],
        specialties: &["cloud migration", "cybersecurity", "IT infrastructure"],
        agencies: &["Department of Homeland Security", "Department of the Navy"],
        email: Some("info@sev1tech.com"),
        phone: Some("703-897-8950"),
        liaison: None,
        portal: None,
        website: Some("https://www.sev1tech.com"),
    },
    Row {
        name: "Bristol Bay Construction Holdings",
        tier: Tier2,
        naics: &["236220", "237310", "562910"],
        specialties: &["construction", "environmental remediation", "civil works"],
        agencies: &["U.S. Army Corps of Engineers", "Naval Facilities Engineering Systems Command"],
        email: Some("info@bbch.us"),
        phone: Some("907-278-3602"),
        liaison: None,
        portal: None,
        website: Some("https://www.bbch.us"),
    },
    Row {
        name: "Valiant Integrated Services",
        tier: Tier2,
        naics: &["541330", "611430"],
        specialties: &["training services", "logistics", "base operations"],
        agencies: &["Department of the Army", "Department of State"],
        email: None,
        phone: Some("703-547-6700"),
        liaison: None,
        portal: None,
        website: Some("https://www.onevaliant.com"),
    },
    Row {
        name: "Barbaricum LLC",
        tier: Tier2,
        naics: &["541511", "541611"],
        specialties: &["data analytics", "strategic communications", "software development"],
        agencies: &["Department of Defense", "Department of the Army"],
        email: Some("contact@barbaricum.com"),
        phone: None,
        liaison: None,
        portal: None,
        website: Some("https://www.barbaricum.com"),
    },
    Row {
        name: "Chenega Corporation",
        tier: Tier2,
        naics: &["561612", "541512"],
        specialties: &["security services", "IT services", "professional staffing"],
        agencies: &["Department of Justice", "Department of Homeland Security"],
        email: Some("info@chenega.com"),
        phone: Some("907-277-5706"),
        liaison: None,
        portal: None,
        website: Some("https://www.chenega.com"),
    },
    Row {
        name: "Seventh Sense Consulting LLC",
        tier: Tier2,
        naics: &["541611", "541612"],
        specialties: &["acquisition support", "program management"],
        agencies: &["Department of Homeland Security", "General Services Administration"],
        email: Some("info@seventhsenseconsulting.com"),
        phone: None,
        liaison: None,
        portal: None,
        website: Some("https://www.seventhsenseconsulting.com"),
    },
];

pub(crate) fn prime_roster() -> Vec<ContractorRecord> {
    PRIMES.iter().map(Row::build).collect()
}

pub(crate) fn tier2_roster() -> Vec<ContractorRecord> {
    TIER2.iter().map(Row::build).collect()
}

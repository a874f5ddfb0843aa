use qav::{
    DateValidator, DomainNameValidator, EmailValidator, HashValidator, IntegerValidator,
    IpAddressValidator, IpNetmaskValidator, ListValidator, MacAddressValidator, PreFilter,
    Question, QuestionSet, Resolver, UriValidator, YesNoValidator,
};

/// Sites a host can belong to, with their display names.
pub const SITES: [(&str, &str); 3] = [
    ("umiacs", "UMIACS"),
    ("cbcb", "Center for Bioinformatics"),
    ("mc2", "Maryland Cybersecurity Center"),
];

/// File servers, named after the site they serve.
pub const FILE_SERVERS: [&str; 5] = [
    "cbcb-fs01",
    "cbcb-fs02",
    "mc2-fs01",
    "umiacs-fs01",
    "umiacs-fs02",
];

/// Questions for registering a new host, using the platform resolver.
#[cfg(feature = "dns")]
pub fn host_provisioning() -> QuestionSet {
    host_provisioning_with(qav::SystemResolver)
}

/// Questions for registering a new host.
///
/// The file server choices are narrowed to the chosen site. Backups ask for a
/// retention period as a follow-up.
pub fn host_provisioning_with(resolver: impl Resolver + 'static) -> QuestionSet {
    let mut set = QuestionSet::new();
    set.add(
        Question::new("Site", "site")
            .printable_name("Site")
            .validator(HashValidator::new(SITES)),
    )
    .add(
        Question::new("Fully qualified host name", "fqdn")
            .printable_name("Host")
            .validator(DomainNameValidator::with_resolver(resolver)),
    )
    .add(
        Question::new("IP address of %(fqdn)s", "ip")
            .printable_name("IP")
            .validator(IpAddressValidator::new()),
    )
    .add(
        Question::new("Netmask", "netmask")
            .printable_name("Netmask")
            .validator(IpNetmaskValidator::new()),
    )
    .add(
        Question::new("MAC address", "mac")
            .printable_name("MAC")
            .validator(MacAddressValidator::new()),
    )
    .add(
        Question::new("File server at %(site)s", "fileserver")
            .printable_name("File server")
            .validator(ListValidator::new(FILE_SERVERS).filter(PreFilter::new("site"))),
    )
    .add(
        Question::new("Alias for %(fqdn)s", "aliases")
            .printable_name("Aliases")
            .multiple(),
    )
    .add(
        Question::new("Contact email (optional)", "contact")
            .printable_name("Contact")
            .validator(EmailValidator::new().blank(true)),
    )
    .add(
        Question::new("Documentation URL (optional)", "docs")
            .printable_name("Docs")
            .validator(UriValidator::new().blank(true)),
    )
    .add(
        Question::new("Decommission date, YYYYMMDD (optional)", "expires")
            .printable_name("Expires")
            .validator(DateValidator::new().blank(true)),
    )
    .add(
        Question::new("Back up %(fqdn)s?", "backup")
            .printable_name("Backup")
            .validator(YesNoValidator::new())
            .subquestion(
                Question::new("Days to keep backups of %(fqdn)s", "retention")
                    .validator(IntegerValidator::new()),
            ),
    );
    set
}

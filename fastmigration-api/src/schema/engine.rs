sql_names! {
    /// Storage engines accepted by `ENGINE=`.
    #[allow(clippy::upper_case_acronyms)]
    pub enum Engine (UnknownEngine) {
        default: InnoDB,
        InnoDB => "InnoDB",
        MyISAM => "MyISAM",
        Memory => "Memory",
        CSV => "CSV",
        Merge => "Merge",
        Archive => "Archive",
        Blackhole => "Blackhole",
        Federated => "Federated",
    }
}

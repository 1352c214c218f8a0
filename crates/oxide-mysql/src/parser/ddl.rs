//! CREATE, ALTER and DROP for tables, views, indexes and databases, plus
//! the dispatch of every other CREATE / ALTER / DROP target.

use super::error::ParseError;
use super::parser::Grammar;
use crate::ast::{
    AlterAlgorithm, AlterDatabase, AlterLock, AlterTable, AlterTableSpec, CreateDatabase,
    CreateDuplicate, CreateIndex, CreateTable, CreateView, DatabaseOption, DropDatabase,
    DropIndex, DropTable, IndexKind, IndexOptions, PartitionMaintenance, PartitionSelection,
    Statement, TemporaryKind, ViewAlgorithm, ViewCheckOption,
};
use crate::lexer::{Keyword, TokenKind};

impl Grammar<'_> {
    pub(super) fn parse_create(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Create)?;
        let or_replace = if self.eat_keyword(Keyword::Or) {
            self.expect_keyword(Keyword::Replace)?;
            true
        } else {
            false
        };
        if or_replace && self.check_keyword(Keyword::Placement) {
            return self.parse_create_placement_policy(true);
        }
        if or_replace
            || matches!(
                self.current().as_keyword(),
                Some(Keyword::Algorithm | Keyword::Definer | Keyword::View)
            )
            || (self.check_keyword(Keyword::Sql) && self.check_word_at(1, "security"))
        {
            return self.parse_create_view(or_replace);
        }
        match self.current().as_keyword() {
            Some(Keyword::Table) => {
                self.advance();
                self.parse_create_table(TemporaryKind::None)
            }
            Some(Keyword::Temporary) => {
                self.advance();
                self.expect_keyword(Keyword::Table)?;
                self.parse_create_table(TemporaryKind::Local)
            }
            Some(Keyword::Local) if self.check_keyword_at(1, Keyword::Temporary) => {
                self.advance();
                self.advance();
                self.expect_keyword(Keyword::Table)?;
                self.parse_create_table(TemporaryKind::Local)
            }
            Some(Keyword::Global) if self.check_keyword_at(1, Keyword::Temporary) => {
                self.advance();
                self.advance();
                self.expect_keyword(Keyword::Table)?;
                self.parse_create_table(TemporaryKind::Global)
            }
            Some(Keyword::Global | Keyword::Session | Keyword::Binding) => {
                self.parse_create_binding()
            }
            Some(Keyword::Index | Keyword::Unique | Keyword::Fulltext | Keyword::Spatial) => {
                self.parse_create_index()
            }
            Some(Keyword::Database) => {
                self.advance();
                self.parse_create_database()
            }
            Some(Keyword::User) => {
                self.advance();
                self.parse_create_user(false)
            }
            Some(Keyword::Role) => {
                self.advance();
                self.parse_create_user(true)
            }
            Some(Keyword::Sequence) => {
                self.advance();
                self.parse_create_sequence()
            }
            Some(Keyword::Placement) => self.parse_create_placement_policy(false),
            Some(Keyword::Resource) => {
                self.advance();
                self.expect_keyword(Keyword::Group)?;
                self.parse_create_resource_group()
            }
            _ if self.check_word("schema") => {
                self.advance();
                self.parse_create_database()
            }
            _ if (self.check_word("vector") || self.check_word("columnar"))
                && self.check_keyword_at(1, Keyword::Index) =>
            {
                self.parse_create_index()
            }
            _ if self.check_word("statistics") => {
                self.advance();
                self.parse_create_statistics()
            }
            _ => Err(self.error()),
        }
    }

    pub(super) fn parse_alter(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Alter)?;
        match self.current().as_keyword() {
            Some(Keyword::Table) => {
                self.advance();
                self.parse_alter_table()
            }
            Some(Keyword::Database) => {
                self.advance();
                self.parse_alter_database()
            }
            Some(Keyword::User) => {
                self.advance();
                self.parse_alter_user()
            }
            Some(Keyword::Instance) => {
                self.advance();
                self.expect_keyword(Keyword::Reload)?;
                self.expect_word("tls")?;
                let no_rollback_on_error = if self.eat_keyword(Keyword::No) {
                    self.expect_keyword(Keyword::Rollback)?;
                    self.expect_keyword(Keyword::On)?;
                    self.expect_word("error")?;
                    true
                } else {
                    false
                };
                Ok(Statement::AlterInstance {
                    no_rollback_on_error,
                })
            }
            Some(Keyword::Sequence) => {
                self.advance();
                self.parse_alter_sequence()
            }
            Some(Keyword::Placement) => self.parse_alter_placement_policy(),
            Some(Keyword::Resource) => {
                self.advance();
                self.expect_keyword(Keyword::Group)?;
                self.parse_alter_resource_group()
            }
            Some(Keyword::Range) => {
                self.advance();
                self.parse_alter_range()
            }
            _ if self.check_word("schema") => {
                self.advance();
                self.parse_alter_database()
            }
            _ => Err(self.error()),
        }
    }

    pub(super) fn parse_drop(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Drop)?;
        match self.current().as_keyword() {
            Some(Keyword::Table | Keyword::Tables) => {
                self.advance();
                self.parse_drop_table(false, TemporaryKind::None)
            }
            Some(Keyword::Temporary) => {
                self.advance();
                self.expect_table_or_tables()?;
                self.parse_drop_table(false, TemporaryKind::Local)
            }
            Some(Keyword::Global) if self.check_keyword_at(1, Keyword::Temporary) => {
                self.advance();
                self.advance();
                self.expect_table_or_tables()?;
                self.parse_drop_table(false, TemporaryKind::Global)
            }
            Some(Keyword::View) => {
                self.advance();
                self.parse_drop_table(true, TemporaryKind::None)
            }
            Some(Keyword::Index) => {
                self.advance();
                self.parse_drop_index()
            }
            Some(Keyword::Database) => {
                self.advance();
                self.parse_drop_database()
            }
            Some(Keyword::User) => {
                self.advance();
                self.parse_drop_user(false)
            }
            Some(Keyword::Role) => {
                self.advance();
                self.parse_drop_user(true)
            }
            Some(Keyword::Sequence) => {
                self.advance();
                self.parse_drop_sequence()
            }
            Some(Keyword::Placement) => {
                self.advance();
                self.expect_keyword(Keyword::Policy)?;
                let if_exists = self.parse_if_exists()?;
                let name = self.expect_identifier()?;
                Ok(Statement::DropPlacementPolicy { if_exists, name })
            }
            Some(Keyword::Resource) => {
                self.advance();
                self.expect_keyword(Keyword::Group)?;
                let if_exists = self.parse_if_exists()?;
                let name = self.expect_resource_group_name()?;
                Ok(Statement::DropResourceGroup { if_exists, name })
            }
            Some(Keyword::Global | Keyword::Session | Keyword::Binding) => {
                self.parse_drop_binding()
            }
            Some(Keyword::Stats) => {
                self.advance();
                self.parse_drop_stats()
            }
            Some(Keyword::Prepare) => {
                self.advance();
                Ok(Statement::Deallocate(self.expect_identifier()?))
            }
            _ if self.check_word("schema") => {
                self.advance();
                self.parse_drop_database()
            }
            _ if self.check_word("sequences") => {
                self.advance();
                self.parse_drop_sequence()
            }
            _ if self.check_word("statistics") => {
                self.advance();
                Ok(Statement::DropStatistics(self.expect_identifier()?))
            }
            _ => Err(self.error()),
        }
    }

    fn expect_table_or_tables(&mut self) -> Result<(), ParseError> {
        if self.eat_keyword(Keyword::Tables) {
            return Ok(());
        }
        self.expect_keyword(Keyword::Table)
    }

    /// `RENAME TABLE a TO b, ...` or `RENAME USER ...`
    pub(super) fn parse_rename(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Rename)?;
        if self.eat_keyword(Keyword::User) {
            return self.parse_rename_user();
        }
        self.expect_table_or_tables()?;
        let mut pairs = Vec::new();
        loop {
            let old = self.parse_table_name()?;
            self.expect_keyword(Keyword::To)?;
            let new = self.parse_table_name()?;
            pairs.push((old, new));
            if !self.eat(&TokenKind::Comma) {
                return Ok(Statement::RenameTable(pairs));
            }
        }
    }

    /// `TRUNCATE [TABLE] t`
    pub(super) fn parse_truncate(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Truncate)?;
        self.eat_keyword(Keyword::Table);
        Ok(Statement::Truncate(self.parse_table_name()?))
    }

    // Tables

    /// CREATE TABLE after the `TABLE` keyword.
    fn parse_create_table(&mut self, temporary: TemporaryKind) -> Result<Statement, ParseError> {
        let if_not_exists = self.parse_if_not_exists()?;
        let mut create = CreateTable::new(self.parse_table_name()?);
        create.temporary = temporary;
        create.if_not_exists = if_not_exists;

        if self.eat_keyword(Keyword::Like) {
            create.like = Some(self.parse_table_name()?);
            return Ok(Statement::CreateTable(Box::new(create)));
        }
        if self.check(&TokenKind::LeftParen) && self.check_keyword_at(1, Keyword::Like) {
            self.advance();
            self.advance();
            create.like = Some(self.parse_table_name()?);
            self.expect(&TokenKind::RightParen)?;
            return Ok(Statement::CreateTable(Box::new(create)));
        }
        if self.check(&TokenKind::LeftParen) && !self.is_query_start(1) {
            self.advance();
            loop {
                if self.is_constraint_start() {
                    create.constraints.push(self.parse_constraint()?);
                } else {
                    create.columns.push(self.parse_column_def()?);
                }
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen)?;
        }
        create.options = self.parse_table_options(true)?;
        if self.check_keyword(Keyword::Partition) {
            create.partition = Some(self.parse_partition_by()?);
        }
        if self.eat_keyword(Keyword::Ignore) {
            create.duplicate = CreateDuplicate::Ignore;
        } else if self.eat_keyword(Keyword::Replace) {
            create.duplicate = CreateDuplicate::Replace;
        }
        let has_as = self.eat_keyword(Keyword::As);
        if has_as || self.is_query_start(0) || self.check(&TokenKind::LeftParen) {
            create.query = Some(Box::new(self.parse_query()?));
        } else if create.duplicate != CreateDuplicate::Error {
            return Err(self.error());
        }
        if self.check_keyword(Keyword::On) && self.check_keyword_at(1, Keyword::Commit) {
            self.advance();
            self.advance();
            create.on_commit_delete_rows = Some(if self.eat_keyword(Keyword::Delete) {
                true
            } else {
                self.expect_word("preserve")?;
                false
            });
            self.expect_keyword(Keyword::Rows)?;
        }
        Ok(Statement::CreateTable(Box::new(create)))
    }

    /// ALTER TABLE after the `TABLE` keyword.
    fn parse_alter_table(&mut self) -> Result<Statement, ParseError> {
        let table = self.parse_table_name()?;
        let mut specs = Vec::new();
        let mut partition = None;
        loop {
            if self.check_keyword(Keyword::Partition) && self.check_keyword_at(1, Keyword::By) {
                partition = Some(self.parse_partition_by()?);
                break;
            }
            if matches!(self.current().kind, TokenKind::Eof | TokenKind::Semicolon) {
                break;
            }
            specs.push(self.parse_alter_table_spec()?);
            if !self.eat(&TokenKind::Comma) {
                if self.check_keyword(Keyword::Partition) && self.check_keyword_at(1, Keyword::By)
                {
                    continue;
                }
                break;
            }
        }
        Ok(Statement::AlterTable(Box::new(AlterTable {
            table,
            specs,
            partition,
        })))
    }

    #[allow(clippy::too_many_lines)]
    fn parse_alter_table_spec(&mut self) -> Result<AlterTableSpec, ParseError> {
        let Some(kw) = self.current().as_keyword() else {
            return self.parse_alter_table_spec_word();
        };
        let spec = match kw {
            Keyword::Add => {
                self.advance();
                return self.parse_alter_add();
            }
            Keyword::Drop => {
                self.advance();
                return self.parse_alter_drop();
            }
            Keyword::Modify => {
                self.advance();
                self.eat_keyword(Keyword::Column);
                let if_exists = self.parse_if_exists()?;
                let column = self.parse_column_def()?;
                let position = self.parse_column_position()?;
                AlterTableSpec::ModifyColumn {
                    if_exists,
                    column,
                    position,
                }
            }
            Keyword::Change => {
                self.advance();
                self.eat_keyword(Keyword::Column);
                let if_exists = self.parse_if_exists()?;
                let old = self.parse_column_name()?;
                let column = self.parse_column_def()?;
                let position = self.parse_column_position()?;
                AlterTableSpec::ChangeColumn {
                    if_exists,
                    old,
                    column,
                    position,
                }
            }
            Keyword::Rename => {
                self.advance();
                if self.eat_keyword(Keyword::Column) {
                    let old = self.parse_column_name()?;
                    self.expect_keyword(Keyword::To)?;
                    let new = self.parse_column_name()?;
                    AlterTableSpec::RenameColumn { old, new }
                } else if self.eat_keyword(Keyword::Index) || self.eat_keyword(Keyword::Key) {
                    let old = self.expect_identifier()?;
                    self.expect_keyword(Keyword::To)?;
                    let new = self.expect_identifier()?;
                    AlterTableSpec::RenameIndex { old, new }
                } else {
                    if !self.eat_keyword(Keyword::To) {
                        self.eat_keyword(Keyword::As);
                    }
                    AlterTableSpec::RenameTable(self.parse_table_name()?)
                }
            }
            Keyword::Alter => {
                self.advance();
                return self.parse_alter_alter();
            }
            Keyword::Lock => {
                self.advance();
                self.eat_eq();
                AlterTableSpec::Lock(self.parse_alter_lock()?)
            }
            Keyword::Algorithm => {
                self.advance();
                self.eat_eq();
                AlterTableSpec::Algorithm(self.parse_alter_algorithm()?)
            }
            Keyword::Force => {
                self.advance();
                AlterTableSpec::Force
            }
            Keyword::Convert => {
                self.advance();
                self.expect_keyword(Keyword::To)?;
                if !self.eat_charset_keyword() {
                    return Err(self.error());
                }
                let charset = if self.eat_keyword(Keyword::Default) {
                    None
                } else {
                    Some(self.parse_charset_name()?)
                };
                let collate = if self.eat_keyword(Keyword::Collate) {
                    Some(self.parse_collation_name()?)
                } else {
                    None
                };
                AlterTableSpec::ConvertToCharset { charset, collate }
            }
            Keyword::Discard | Keyword::Import if self.check_keyword_at(1, Keyword::Tablespace) => {
                let import = self.check_keyword(Keyword::Import);
                self.advance();
                self.advance();
                AlterTableSpec::Tablespace(import)
            }
            Keyword::Enable | Keyword::Disable => {
                let enable = self.check_keyword(Keyword::Enable);
                self.advance();
                self.expect_keyword(Keyword::Keys)?;
                AlterTableSpec::Keys(enable)
            }
            Keyword::Order => {
                self.advance();
                self.expect_keyword(Keyword::By)?;
                AlterTableSpec::OrderBy(self.parse_order_by_items()?)
            }
            Keyword::With | Keyword::Without
                if self.check_keyword_at(1, Keyword::Validation) =>
            {
                let with = self.check_keyword(Keyword::With);
                self.advance();
                self.advance();
                AlterTableSpec::Validation(with)
            }
            Keyword::Cache => {
                self.advance();
                AlterTableSpec::Cache(true)
            }
            Keyword::Nocache => {
                self.advance();
                AlterTableSpec::Cache(false)
            }
            Keyword::Read => {
                self.advance();
                if self.eat_keyword(Keyword::Only) {
                    AlterTableSpec::ReadOnly(true)
                } else {
                    self.expect_keyword(Keyword::Write)?;
                    AlterTableSpec::ReadOnly(false)
                }
            }
            Keyword::Set if self.check_word_at(1, "tiflash") => {
                self.advance();
                self.advance();
                self.expect_word("replica")?;
                let count = self.expect_u64()?;
                let labels = if self.eat_word("location") {
                    self.expect_word("labels")?;
                    let mut labels = vec![self.expect_string()?];
                    while self.eat(&TokenKind::Comma) {
                        labels.push(self.expect_string()?);
                    }
                    labels
                } else {
                    Vec::new()
                };
                AlterTableSpec::TiflashReplica { count, labels }
            }
            Keyword::Compact => {
                self.advance();
                let partitions = if self.eat_keyword(Keyword::Partition) {
                    self.parse_identifier_list()?
                } else {
                    Vec::new()
                };
                let tiflash = if self.eat_word("tiflash") {
                    self.expect_word("replica")?;
                    true
                } else {
                    false
                };
                AlterTableSpec::Compact {
                    partitions,
                    tiflash,
                }
            }
            Keyword::Attributes => {
                self.advance();
                self.eat_eq();
                AlterTableSpec::Attributes(self.parse_opt_default_attributes()?)
            }
            Keyword::Partition => {
                self.advance();
                let name = self.expect_identifier()?;
                if self.eat_keyword(Keyword::Attributes) {
                    self.eat_eq();
                    AlterTableSpec::PartitionAttributes {
                        name,
                        attributes: self.parse_opt_default_attributes()?,
                    }
                } else {
                    self.eat_keyword(Keyword::Default);
                    self.expect_keyword(Keyword::Placement)?;
                    self.expect_keyword(Keyword::Policy)?;
                    self.eat_eq();
                    let policy = if self.eat_keyword(Keyword::Default) {
                        None
                    } else {
                        Some(self.expect_name_or_string()?)
                    };
                    AlterTableSpec::PartitionPlacement { name, policy }
                }
            }
            Keyword::Remove => {
                self.advance();
                if self.eat_keyword(Keyword::Ttl) {
                    AlterTableSpec::RemoveTtl
                } else {
                    self.expect_keyword(Keyword::Partitioning)?;
                    AlterTableSpec::RemovePartitioning
                }
            }
            Keyword::Coalesce => {
                self.advance();
                self.expect_keyword(Keyword::Partition)?;
                AlterTableSpec::CoalescePartition(self.expect_u64()?)
            }
            Keyword::Reorganize => {
                self.advance();
                self.expect_keyword(Keyword::Partition)?;
                if self.is_identifier_at(0) {
                    let names = self.parse_identifier_list()?;
                    self.expect_keyword(Keyword::Into)?;
                    let defs = self.parse_partition_defs()?;
                    AlterTableSpec::ReorganizePartition { names, defs }
                } else {
                    AlterTableSpec::ReorganizePartition {
                        names: Vec::new(),
                        defs: Vec::new(),
                    }
                }
            }
            Keyword::Exchange => {
                self.advance();
                self.expect_keyword(Keyword::Partition)?;
                let name = self.expect_identifier()?;
                self.expect_keyword(Keyword::With)?;
                self.expect_keyword(Keyword::Table)?;
                let table = self.parse_table_name()?;
                let validation = if self.check_keyword_at(1, Keyword::Validation) {
                    if self.eat_keyword(Keyword::With) {
                        self.advance();
                        Some(true)
                    } else if self.eat_keyword(Keyword::Without) {
                        self.advance();
                        Some(false)
                    } else {
                        None
                    }
                } else {
                    None
                };
                AlterTableSpec::ExchangePartition {
                    name,
                    table,
                    validation,
                }
            }
            Keyword::Analyze
            | Keyword::Check
            | Keyword::Optimize
            | Keyword::Rebuild
            | Keyword::Repair
            | Keyword::Truncate
            | Keyword::Discard
            | Keyword::Import => {
                let op = match kw {
                    Keyword::Analyze => PartitionMaintenance::Analyze,
                    Keyword::Check => PartitionMaintenance::Check,
                    Keyword::Optimize => PartitionMaintenance::Optimize,
                    Keyword::Rebuild => PartitionMaintenance::Rebuild,
                    Keyword::Repair => PartitionMaintenance::Repair,
                    Keyword::Truncate => PartitionMaintenance::Truncate,
                    Keyword::Discard => PartitionMaintenance::Discard,
                    _ => PartitionMaintenance::Import,
                };
                self.advance();
                self.expect_keyword(Keyword::Partition)?;
                let selection = if self.eat_keyword(Keyword::All) {
                    PartitionSelection::All
                } else {
                    PartitionSelection::Names(self.parse_identifier_list()?)
                };
                if matches!(op, PartitionMaintenance::Discard | PartitionMaintenance::Import) {
                    self.expect_keyword(Keyword::Tablespace)?;
                }
                AlterTableSpec::Partitions { op, selection }
            }
            Keyword::First => AlterTableSpec::FirstPartition(self.parse_range_end(Keyword::First)?),
            Keyword::Last => AlterTableSpec::LastPartition(self.parse_range_end(Keyword::Last)?),
            Keyword::Merge => {
                self.advance();
                AlterTableSpec::MergeFirstPartition(self.parse_range_end(Keyword::First)?)
            }
            _ => return self.parse_alter_table_spec_word(),
        };
        Ok(spec)
    }

    /// Specs led by words and the table-option fallback.
    fn parse_alter_table_spec_word(&mut self) -> Result<AlterTableSpec, ParseError> {
        if self.check_word("split") && self.check_keyword_at(1, Keyword::Maxvalue) {
            self.advance();
            self.advance();
            self.expect_keyword(Keyword::Partition)?;
            self.expect_keyword(Keyword::Less)?;
            self.expect_keyword(Keyword::Than)?;
            self.expect(&TokenKind::LeftParen)?;
            let expr = self.parse_expr()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(AlterTableSpec::SplitMaxvaluePartition(expr));
        }
        let options = self.parse_table_options(false)?;
        if options.is_empty() {
            return Err(self.error());
        }
        Ok(AlterTableSpec::Options(options))
    }

    fn parse_opt_default_attributes(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_keyword(Keyword::Default) {
            Ok(None)
        } else {
            self.expect_string().map(Some)
        }
    }

    /// The part of an ALTER TABLE spec after `ADD`.
    fn parse_alter_add(&mut self) -> Result<AlterTableSpec, ParseError> {
        if self.eat_keyword(Keyword::Partition) {
            let if_not_exists = self.parse_if_not_exists()?;
            if self.eat_keyword(Keyword::Partitions) {
                return Ok(AlterTableSpec::AddPartitions {
                    if_not_exists,
                    defs: Vec::new(),
                    count: Some(self.expect_u64()?),
                });
            }
            return Ok(AlterTableSpec::AddPartitions {
                if_not_exists,
                defs: self.parse_partition_defs()?,
                count: None,
            });
        }
        if self.is_constraint_start() {
            return Ok(AlterTableSpec::AddConstraint(self.parse_constraint()?));
        }
        self.eat_keyword(Keyword::Column);
        let if_not_exists = self.parse_if_not_exists()?;
        if self.eat(&TokenKind::LeftParen) {
            let mut columns = vec![self.parse_column_def()?];
            while self.eat(&TokenKind::Comma) {
                columns.push(self.parse_column_def()?);
            }
            self.expect(&TokenKind::RightParen)?;
            return Ok(AlterTableSpec::AddColumns {
                if_not_exists,
                columns,
                parenthesized: true,
                position: Default::default(),
            });
        }
        let column = self.parse_column_def()?;
        let position = self.parse_column_position()?;
        Ok(AlterTableSpec::AddColumns {
            if_not_exists,
            columns: vec![column],
            parenthesized: false,
            position,
        })
    }

    /// The part of an ALTER TABLE spec after `DROP`.
    fn parse_alter_drop(&mut self) -> Result<AlterTableSpec, ParseError> {
        match self.current().as_keyword() {
            Some(Keyword::Primary) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                Ok(AlterTableSpec::DropPrimaryKey)
            }
            Some(Keyword::Index | Keyword::Key) => {
                self.advance();
                let if_exists = self.parse_if_exists()?;
                let name = self.expect_identifier()?;
                Ok(AlterTableSpec::DropIndex { if_exists, name })
            }
            Some(Keyword::Foreign) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                let if_exists = self.parse_if_exists()?;
                let name = self.expect_identifier()?;
                Ok(AlterTableSpec::DropForeignKey { if_exists, name })
            }
            Some(Keyword::Check | Keyword::Constraint) => {
                self.advance();
                Ok(AlterTableSpec::DropCheck(self.expect_identifier()?))
            }
            Some(Keyword::Partition) => {
                self.advance();
                let if_exists = self.parse_if_exists()?;
                let names = self.parse_identifier_list()?;
                Ok(AlterTableSpec::DropPartition { if_exists, names })
            }
            _ => {
                self.eat_keyword(Keyword::Column);
                let if_exists = self.parse_if_exists()?;
                let name = self.parse_column_name()?;
                self.eat_keyword(Keyword::Restrict);
                self.eat_keyword(Keyword::Cascade);
                Ok(AlterTableSpec::DropColumn { if_exists, name })
            }
        }
    }

    /// The part of an ALTER TABLE spec after `ALTER`.
    fn parse_alter_alter(&mut self) -> Result<AlterTableSpec, ParseError> {
        if self.eat_keyword(Keyword::Index) {
            let name = self.expect_identifier()?;
            let visible = if self.eat_keyword(Keyword::Visible) {
                true
            } else {
                self.expect_keyword(Keyword::Invisible)?;
                false
            };
            return Ok(AlterTableSpec::AlterIndexVisibility { name, visible });
        }
        if self.eat_keyword(Keyword::Check) {
            let name = self.expect_identifier()?;
            let enforced = self.parse_enforced();
            return Ok(AlterTableSpec::AlterCheck { name, enforced });
        }
        self.eat_keyword(Keyword::Column);
        let name = self.parse_column_name()?;
        if self.eat_keyword(Keyword::Set) {
            self.expect_keyword(Keyword::Default)?;
            let default = self.parse_default_value()?;
            return Ok(AlterTableSpec::AlterColumnDefault {
                name,
                default: Some(default),
            });
        }
        self.expect_keyword(Keyword::Drop)?;
        self.expect_keyword(Keyword::Default)?;
        Ok(AlterTableSpec::AlterColumnDefault {
            name,
            default: None,
        })
    }

    fn parse_alter_lock(&mut self) -> Result<AlterLock, ParseError> {
        if self.eat_keyword(Keyword::Default) {
            return Ok(AlterLock::Default);
        }
        if self.eat_keyword(Keyword::None) {
            return Ok(AlterLock::None);
        }
        if self.eat_keyword(Keyword::Shared) {
            return Ok(AlterLock::Shared);
        }
        self.expect_word("exclusive")?;
        Ok(AlterLock::Exclusive)
    }

    fn parse_alter_algorithm(&mut self) -> Result<AlterAlgorithm, ParseError> {
        if self.eat_keyword(Keyword::Default) {
            return Ok(AlterAlgorithm::Default);
        }
        if self.eat_word("copy") {
            return Ok(AlterAlgorithm::Copy);
        }
        if self.eat_word("inplace") {
            return Ok(AlterAlgorithm::Inplace);
        }
        self.expect_word("instant")?;
        Ok(AlterAlgorithm::Instant)
    }

    /// `[IF EXISTS] t, ... [RESTRICT | CASCADE]`
    fn parse_drop_table(
        &mut self,
        view: bool,
        temporary: TemporaryKind,
    ) -> Result<Statement, ParseError> {
        let if_exists = self.parse_if_exists()?;
        let tables = self.parse_table_name_list()?;
        let cascade = if self.eat_keyword(Keyword::Cascade) {
            Some(true)
        } else if self.eat_keyword(Keyword::Restrict) {
            Some(false)
        } else {
            None
        };
        Ok(Statement::DropTable(Box::new(DropTable {
            if_exists,
            view,
            temporary,
            tables,
            cascade,
        })))
    }

    // Views

    /// CREATE VIEW after `CREATE [OR REPLACE]`.
    fn parse_create_view(&mut self, or_replace: bool) -> Result<Statement, ParseError> {
        let algorithm = if self.eat_keyword(Keyword::Algorithm) {
            self.expect(&TokenKind::Eq)?;
            Some(if self.eat_keyword(Keyword::Undefined) {
                ViewAlgorithm::Undefined
            } else if self.eat_keyword(Keyword::Merge) {
                ViewAlgorithm::Merge
            } else {
                self.expect_keyword(Keyword::Temptable)?;
                ViewAlgorithm::TempTable
            })
        } else {
            None
        };
        let definer = if self.eat_keyword(Keyword::Definer) {
            self.expect(&TokenKind::Eq)?;
            Some(self.parse_user_identity()?)
        } else {
            None
        };
        let security_definer = if self.check_keyword(Keyword::Sql) {
            self.advance();
            self.expect_word("security")?;
            if self.eat_keyword(Keyword::Definer) {
                Some(true)
            } else {
                self.expect_keyword(Keyword::Invoker)?;
                Some(false)
            }
        } else {
            None
        };
        self.expect_keyword(Keyword::View)?;
        let name = self.parse_table_name()?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_paren_identifier_list()?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::As)?;
        let query = Box::new(self.parse_query()?);
        let check_option = if self.check_keyword(Keyword::With) {
            self.advance();
            let option = if self.eat_keyword(Keyword::Local) {
                ViewCheckOption::Local
            } else {
                self.eat_keyword(Keyword::Cascaded);
                ViewCheckOption::Cascaded
            };
            self.expect_keyword(Keyword::Check)?;
            self.expect_keyword(Keyword::Option)?;
            Some(option)
        } else {
            None
        };
        Ok(Statement::CreateView(Box::new(CreateView {
            or_replace,
            algorithm,
            definer,
            security_definer,
            name,
            columns,
            query,
            check_option,
        })))
    }

    // Indexes

    fn parse_create_index(&mut self) -> Result<Statement, ParseError> {
        let kind = if self.eat_keyword(Keyword::Unique) {
            IndexKind::Unique
        } else if self.eat_keyword(Keyword::Fulltext) {
            IndexKind::Fulltext
        } else if self.eat_keyword(Keyword::Spatial) {
            IndexKind::Spatial
        } else if self.eat_word("vector") {
            IndexKind::Vector
        } else if self.eat_word("columnar") {
            IndexKind::Columnar
        } else {
            IndexKind::Plain
        };
        self.expect_keyword(Keyword::Index)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.expect_identifier()?;
        let mut options = IndexOptions::default();
        self.parse_index_options(&mut options)?;
        self.expect_keyword(Keyword::On)?;
        let table = self.parse_table_name()?;
        let parts = self.parse_index_parts()?;
        self.parse_index_options(&mut options)?;
        let mut algorithm = None;
        let mut lock = None;
        loop {
            if self.eat_keyword(Keyword::Algorithm) {
                self.eat_eq();
                algorithm = Some(self.parse_alter_algorithm()?);
            } else if self.eat_keyword(Keyword::Lock) {
                self.eat_eq();
                lock = Some(self.parse_alter_lock()?);
            } else {
                break;
            }
        }
        Ok(Statement::CreateIndex(Box::new(CreateIndex {
            kind,
            if_not_exists,
            name,
            table,
            parts,
            options,
            algorithm,
            lock,
        })))
    }

    /// DROP INDEX after the `INDEX` keyword.
    fn parse_drop_index(&mut self) -> Result<Statement, ParseError> {
        let if_exists = self.parse_if_exists()?;
        let name = self.expect_identifier()?;
        self.expect_keyword(Keyword::On)?;
        let table = self.parse_table_name()?;
        while self.eat_keyword(Keyword::Algorithm) || self.eat_keyword(Keyword::Lock) {
            self.eat_eq();
            self.take_option_word()?;
        }
        Ok(Statement::DropIndex(Box::new(DropIndex {
            if_exists,
            name,
            table,
        })))
    }

    fn take_option_word(&mut self) -> Result<(), ParseError> {
        if matches!(
            self.current().kind,
            TokenKind::Identifier(_) | TokenKind::Keyword(_)
        ) {
            self.advance();
            Ok(())
        } else {
            Err(self.error())
        }
    }

    // Databases

    fn parse_database_name(&mut self) -> Result<String, ParseError> {
        let span = self.current().span;
        let name = self.expect_identifier()?;
        self.check_db_name(&name, span)?;
        Ok(name)
    }

    fn parse_create_database(&mut self) -> Result<Statement, ParseError> {
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_database_name()?;
        let options = self.parse_database_options()?;
        Ok(Statement::CreateDatabase(Box::new(CreateDatabase {
            if_not_exists,
            name,
            options,
        })))
    }

    fn parse_alter_database(&mut self) -> Result<Statement, ParseError> {
        let name = if self.is_identifier_at(0) && !self.is_database_option_start() {
            Some(self.parse_database_name()?)
        } else {
            None
        };
        let options = self.parse_database_options()?;
        if options.is_empty() {
            return Err(self.error());
        }
        Ok(Statement::AlterDatabase(Box::new(AlterDatabase {
            name,
            options,
        })))
    }

    fn parse_drop_database(&mut self) -> Result<Statement, ParseError> {
        let if_exists = self.parse_if_exists()?;
        let name = self.parse_database_name()?;
        Ok(Statement::DropDatabase(Box::new(DropDatabase {
            if_exists,
            name,
        })))
    }

    fn is_database_option_start(&self) -> bool {
        matches!(
            self.current().as_keyword(),
            Some(
                Keyword::Default
                    | Keyword::Charset
                    | Keyword::Collate
                    | Keyword::Encryption
                    | Keyword::Placement
            )
        ) || (matches!(
            self.current().as_keyword(),
            Some(Keyword::Character | Keyword::Char | Keyword::Set)
        ) && (self.check_keyword_at(1, Keyword::Set) || self.check_word_at(1, "tiflash")))
    }

    fn parse_database_options(&mut self) -> Result<Vec<DatabaseOption>, ParseError> {
        let mut options = Vec::new();
        loop {
            self.eat_keyword(Keyword::Default);
            let option = if self.eat_charset_keyword() {
                self.eat_eq();
                DatabaseOption::Charset(self.parse_charset_name()?)
            } else if self.eat_keyword(Keyword::Collate) {
                self.eat_eq();
                DatabaseOption::Collate(self.parse_collation_name()?)
            } else if self.eat_keyword(Keyword::Encryption) {
                self.eat_eq();
                DatabaseOption::Encryption(self.expect_string()?)
            } else if self.eat_keyword(Keyword::Placement) {
                self.expect_keyword(Keyword::Policy)?;
                self.eat_eq();
                if self.eat_keyword(Keyword::Default) {
                    DatabaseOption::PlacementPolicy(None)
                } else {
                    DatabaseOption::PlacementPolicy(Some(self.expect_name_or_string()?))
                }
            } else if self.check_keyword(Keyword::Set) && self.check_word_at(1, "tiflash") {
                self.advance();
                self.advance();
                self.expect_word("replica")?;
                DatabaseOption::TiflashReplica(self.expect_u64()?)
            } else {
                return Ok(options);
            };
            options.push(option);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        AlterTableSpec, ColumnPosition, CreateDuplicate, DatabaseOption, IndexKind,
        PartitionSelection, Statement, TableName, TableOption, TemporaryKind,
    };
    use crate::{ErrorCode, Parser};

    fn parse(sql: &str) -> Statement {
        Parser::new().parse_one_stmt(sql, "", "").unwrap().stmt
    }

    fn alter_specs(sql: &str) -> Vec<AlterTableSpec> {
        match parse(sql) {
            Statement::AlterTable(alter) => alter.specs,
            other => panic!("expected ALTER TABLE, got {other:?}"),
        }
    }

    #[test]
    fn test_create_table_columns() {
        let Statement::CreateTable(create) = parse("CREATE TABLE foo (a SMALLINT UNSIGNED, b INT UNSIGNED)")
        else {
            panic!("expected CREATE TABLE");
        };
        assert_eq!(create.table, TableName::new("foo"));
        assert_eq!(create.columns.len(), 2);
        assert!(create.columns[0].data_type.unsigned);
    }

    #[test]
    fn test_create_table_like_and_select() {
        let Statement::CreateTable(like) = parse("CREATE TABLE IF NOT EXISTS t2 (LIKE t1)") else {
            panic!("expected CREATE TABLE");
        };
        assert!(like.if_not_exists);
        assert_eq!(like.like, Some(TableName::new("t1")));

        let Statement::CreateTable(query) = parse("CREATE GLOBAL TEMPORARY TABLE t (a INT) REPLACE AS SELECT 1 ON COMMIT DELETE ROWS")
        else {
            panic!("expected CREATE TABLE");
        };
        assert_eq!(query.temporary, TemporaryKind::Global);
        assert_eq!(query.duplicate, CreateDuplicate::Replace);
        assert!(query.query.is_some());
        assert_eq!(query.on_commit_delete_rows, Some(true));
    }

    #[test]
    fn test_create_table_partitioned() {
        let Statement::CreateTable(create) =
            parse("CREATE TABLE t (a INT) ENGINE=InnoDB PARTITION BY HASH (a) PARTITIONS 4")
        else {
            panic!("expected CREATE TABLE");
        };
        assert_eq!(create.options, vec![TableOption::Engine("InnoDB".into())]);
        assert!(create.partition.is_some());
    }

    #[test]
    fn test_alter_table_specs() {
        let specs = alter_specs(
            "ALTER TABLE t ADD COLUMN c INT AFTER b, DROP INDEX IF EXISTS i, \
             MODIFY a BIGINT FIRST, RENAME COLUMN x TO y, ALTER INDEX i INVISIBLE, \
             ALGORITHM = INPLACE, LOCK = NONE, ENGINE = InnoDB",
        );
        assert_eq!(specs.len(), 8);
        assert!(matches!(
            &specs[0],
            AlterTableSpec::AddColumns { position: ColumnPosition::After(_), .. }
        ));
        assert!(matches!(&specs[1], AlterTableSpec::DropIndex { if_exists: true, .. }));
        assert!(matches!(
            &specs[2],
            AlterTableSpec::ModifyColumn { position: ColumnPosition::First, .. }
        ));
        assert!(matches!(&specs[4], AlterTableSpec::AlterIndexVisibility { visible: false, .. }));
        assert!(matches!(&specs[7], AlterTableSpec::Options(_)));
    }

    #[test]
    fn test_alter_table_partitions() {
        let specs = alter_specs("ALTER TABLE t TRUNCATE PARTITION ALL");
        assert_eq!(
            specs[0],
            AlterTableSpec::Partitions {
                op: crate::ast::PartitionMaintenance::Truncate,
                selection: PartitionSelection::All
            }
        );
        let specs = alter_specs("ALTER TABLE t LAST PARTITION LESS THAN (100)");
        assert!(matches!(specs[0], AlterTableSpec::LastPartition(_)));
        let specs = alter_specs("ALTER TABLE t SPLIT MAXVALUE PARTITION LESS THAN (10)");
        assert!(matches!(specs[0], AlterTableSpec::SplitMaxvaluePartition(_)));
        let specs = alter_specs("ALTER TABLE t SET TIFLASH REPLICA 2 LOCATION LABELS 'a', 'b'");
        assert_eq!(
            specs[0],
            AlterTableSpec::TiflashReplica {
                count: 2,
                labels: vec!["a".into(), "b".into()]
            }
        );
    }

    #[test]
    fn test_alter_table_trailing_partition_by() {
        let Statement::AlterTable(alter) =
            parse("ALTER TABLE t COMMENT 'x' PARTITION BY HASH (a) PARTITIONS 2")
        else {
            panic!("expected ALTER TABLE");
        };
        assert_eq!(alter.specs.len(), 1);
        assert!(alter.partition.is_some());
    }

    #[test]
    fn test_create_index() {
        let Statement::CreateIndex(index) =
            parse("CREATE UNIQUE INDEX IF NOT EXISTS i ON t (a, b DESC) INVISIBLE ALGORITHM = COPY")
        else {
            panic!("expected CREATE INDEX");
        };
        assert_eq!(index.kind, IndexKind::Unique);
        assert!(index.if_not_exists);
        assert_eq!(index.parts.len(), 2);
        assert_eq!(index.options.visible, Some(false));
        assert!(index.algorithm.is_some());
    }

    #[test]
    fn test_create_view() {
        let Statement::CreateView(view) = parse(
            "CREATE OR REPLACE ALGORITHM = MERGE DEFINER = 'root'@'localhost' SQL SECURITY INVOKER \
             VIEW v (a) AS SELECT 1 WITH LOCAL CHECK OPTION",
        ) else {
            panic!("expected CREATE VIEW");
        };
        assert!(view.or_replace);
        assert_eq!(view.definer.as_ref().unwrap().user, "root");
        assert_eq!(view.security_definer, Some(false));
        assert_eq!(view.columns, vec!["a"]);
        assert!(view.check_option.is_some());
    }

    #[test]
    fn test_databases() {
        let Statement::CreateDatabase(db) =
            parse("CREATE SCHEMA IF NOT EXISTS d DEFAULT CHARACTER SET utf8mb4 COLLATE utf8mb4_bin")
        else {
            panic!("expected CREATE DATABASE");
        };
        assert_eq!(db.options[0], DatabaseOption::Charset("utf8mb4".into()));
        let Statement::AlterDatabase(alter) = parse("ALTER DATABASE CHARSET = utf8mb4") else {
            panic!("expected ALTER DATABASE");
        };
        assert!(alter.name.is_none());
        let err = Parser::new().parse_one_stmt("CREATE DATABASE ` `", "", "").unwrap_err();
        assert_eq!(err.code, ErrorCode::WrongDbName);
    }

    #[test]
    fn test_drop_and_rename() {
        let Statement::DropTable(drop) = parse("DROP TEMPORARY TABLE IF EXISTS a, b CASCADE") else {
            panic!("expected DROP TABLE");
        };
        assert_eq!(drop.tables.len(), 2);
        assert_eq!(drop.cascade, Some(true));
        assert!(matches!(parse("DROP VIEW v"), Statement::DropTable(d) if d.view));
        assert!(matches!(parse("RENAME TABLE a TO b, c TO d"), Statement::RenameTable(p) if p.len() == 2));
        assert!(matches!(parse("TRUNCATE t"), Statement::Truncate(_)));
        assert!(matches!(
            parse("ALTER INSTANCE RELOAD TLS NO ROLLBACK ON ERROR"),
            Statement::AlterInstance { no_rollback_on_error: true }
        ));
    }
}

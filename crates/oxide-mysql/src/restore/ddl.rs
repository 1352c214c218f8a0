//! CREATE, ALTER and DROP for tables, views, indexes and databases.

use super::{Restore, RestoreCtx, RestoreError, RestoreFlags, RestoreResult};
use crate::ast::{
    AlterDatabase, AlterTable, AlterTableSpec, ColumnDef, ColumnFormat, ColumnOption,
    ColumnPosition, ColumnStorage, Constraint, ConstraintKind, CreateDatabase, CreateDuplicate,
    CreateIndex, CreateTable, CreateView, DataType, DatabaseOption, DropDatabase, DropIndex,
    DropTable, Expr, IndexKey, IndexOptions, IndexPart, IntervalPartition, PartitionDef,
    PartitionMaintenance, PartitionMethod, PartitionOption, PartitionOptions, PartitionSelection,
    PartitionValues, ReferenceDef, SubPartitionDef, TableOption, TemporaryKind, TypeKind,
    ViewCheckOption,
};

impl Restore for DataType {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(self.kind.as_str())?;
        match self.kind {
            TypeKind::Enum | TypeKind::Set => {
                ctx.write_plain("(")?;
                for (i, elem) in self.elems.iter().enumerate() {
                    if i > 0 {
                        ctx.write_plain(",")?;
                    }
                    ctx.write_string(elem)?;
                }
                ctx.write_plain(")")?;
            }
            TypeKind::Double
                if self.decimals.is_none()
                    && ctx.flags().contains(RestoreFlags::STRICT_DOUBLE_TYPE_CHECK) => {}
            _ => {
                if let Some(length) = self.length {
                    ctx.write_display(format_args!("({length}"))?;
                    if let Some(decimals) = self.decimals {
                        ctx.write_display(format_args!(",{decimals}"))?;
                    }
                    ctx.write_plain(")")?;
                }
            }
        }
        if self.unsigned {
            ctx.write_keyword(" UNSIGNED")?;
        }
        if self.zerofill {
            ctx.write_keyword(" ZEROFILL")?;
        }
        if self.binary {
            ctx.write_keyword(" BINARY")?;
        }
        if let Some(charset) = &self.charset {
            ctx.write_keyword(" CHARACTER SET ")?;
            ctx.write_keyword(charset)?;
        }
        if let Some(collate) = &self.collate {
            ctx.write_keyword(" COLLATE ")?;
            ctx.write_plain(collate)?;
        }
        Ok(())
    }
}

impl Restore for IndexPart {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match &self.key {
            IndexKey::Column { name, length } => {
                name.restore(ctx)?;
                if let Some(length) = length {
                    ctx.write_display(format_args!("({length})"))?;
                }
            }
            IndexKey::Expr(expr) => {
                ctx.write_plain("(")?;
                expr.restore(ctx)?;
                ctx.write_plain(")")?;
            }
        }
        if self.desc {
            ctx.write_keyword(" DESC")?;
        }
        Ok(())
    }
}

fn write_index_parts(ctx: &mut RestoreCtx<'_>, parts: &[IndexPart]) -> RestoreResult {
    ctx.write_plain("(")?;
    ctx.write_list(parts, ", ")?;
    ctx.write_plain(")")
}

impl Restore for ReferenceDef {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("REFERENCES ")?;
        ctx.write_table_name(&self.table)?;
        if !self.parts.is_empty() {
            write_index_parts(ctx, &self.parts)?;
        }
        if let Some(match_type) = self.match_type {
            ctx.write_keyword(" MATCH ")?;
            ctx.write_keyword(match_type.as_str())?;
        }
        if let Some(action) = self.on_delete {
            ctx.write_keyword(" ON DELETE ")?;
            ctx.write_keyword(action.as_str())?;
        }
        if let Some(action) = self.on_update {
            ctx.write_keyword(" ON UPDATE ")?;
            ctx.write_keyword(action.as_str())?;
        }
        Ok(())
    }
}

impl Restore for ColumnOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::NotNull => ctx.write_keyword("NOT NULL"),
            Self::Null => ctx.write_keyword("NULL"),
            Self::PrimaryKey(clustered) => {
                ctx.write_keyword("PRIMARY KEY")?;
                write_clustered(ctx, *clustered)
            }
            Self::UniqueKey => ctx.write_keyword("UNIQUE KEY"),
            Self::AutoIncrement => ctx.write_keyword("AUTO_INCREMENT"),
            Self::Default(expr) => {
                ctx.write_keyword("DEFAULT ")?;
                expr.restore(ctx)
            }
            Self::OnUpdate(expr) => {
                ctx.write_keyword("ON UPDATE ")?;
                expr.restore(ctx)
            }
            Self::Comment(comment) => {
                ctx.write_keyword("COMMENT ")?;
                ctx.write_string(comment)
            }
            Self::Collate(collate) => {
                ctx.write_keyword("COLLATE ")?;
                ctx.write_plain(collate)
            }
            Self::Generated { expr, stored } => {
                ctx.write_keyword("GENERATED ALWAYS AS")?;
                ctx.write_plain("(")?;
                expr.restore(ctx)?;
                ctx.write_plain(")")?;
                ctx.write_keyword(if *stored { " STORED" } else { " VIRTUAL" })
            }
            Self::Check { expr, enforced } => write_check(ctx, expr, *enforced),
            Self::References(reference) => reference.restore(ctx),
            Self::ColumnFormat(format) => {
                ctx.write_keyword("COLUMN_FORMAT ")?;
                ctx.write_keyword(match format {
                    ColumnFormat::Default => "DEFAULT",
                    ColumnFormat::Fixed => "FIXED",
                    ColumnFormat::Dynamic => "DYNAMIC",
                })
            }
            Self::Storage(storage) => {
                ctx.write_keyword("STORAGE ")?;
                ctx.write_keyword(match storage {
                    ColumnStorage::Default => "DEFAULT",
                    ColumnStorage::Disk => "DISK",
                    ColumnStorage::Memory => "MEMORY",
                })
            }
            Self::AutoRandom {
                shard_bits,
                range_bits,
            } => {
                ctx.write_keyword("AUTO_RANDOM")?;
                if let Some(shard_bits) = shard_bits {
                    ctx.write_display(format_args!("({shard_bits}"))?;
                    if let Some(range_bits) = range_bits {
                        ctx.write_display(format_args!(", {range_bits}"))?;
                    }
                    ctx.write_plain(")")?;
                }
                Ok(())
            }
            Self::SecondaryEngineAttribute(value) => {
                ctx.write_keyword("SECONDARY_ENGINE_ATTRIBUTE = ")?;
                ctx.write_string(value)
            }
        }
    }
}

fn write_clustered(ctx: &mut RestoreCtx<'_>, clustered: Option<bool>) -> RestoreResult {
    match clustered {
        Some(true) => ctx.write_keyword(" CLUSTERED"),
        Some(false) => ctx.write_keyword(" NONCLUSTERED"),
        None => Ok(()),
    }
}

fn write_check(ctx: &mut RestoreCtx<'_>, expr: &Expr, enforced: bool) -> RestoreResult {
    ctx.write_keyword("CHECK")?;
    ctx.write_plain("(")?;
    expr.restore(ctx)?;
    ctx.write_plain(")")?;
    if !enforced {
        ctx.write_keyword(" NOT ENFORCED")?;
    }
    Ok(())
}

impl Restore for ColumnDef {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_name(&self.name)?;
        ctx.write_plain(" ")?;
        self.data_type.restore(ctx)?;
        for option in &self.options {
            ctx.write_plain(" ")?;
            option.restore(ctx)?;
        }
        Ok(())
    }
}

impl Restore for ColumnPosition {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::None => Ok(()),
            Self::First => ctx.write_keyword(" FIRST"),
            Self::After(column) => {
                ctx.write_keyword(" AFTER ")?;
                column.restore(ctx)
            }
        }
    }
}

impl Restore for IndexOptions {
    /// Writes each set option with a leading space.
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        if let Some(size) = self.key_block_size {
            ctx.write_keyword(" KEY_BLOCK_SIZE")?;
            ctx.write_display(format_args!("={size}"))?;
        }
        if let Some(using) = self.using {
            ctx.write_keyword(" USING ")?;
            ctx.write_keyword(using.as_str())?;
        }
        if let Some(parser) = &self.parser {
            ctx.write_keyword(" WITH PARSER ")?;
            ctx.write_name(parser)?;
        }
        if let Some(comment) = &self.comment {
            ctx.write_keyword(" COMMENT ")?;
            ctx.write_string(comment)?;
        }
        match self.visible {
            Some(true) => ctx.write_keyword(" VISIBLE")?,
            Some(false) => ctx.write_keyword(" INVISIBLE")?,
            None => {}
        }
        write_clustered(ctx, self.clustered)?;
        match self.global {
            Some(true) => ctx.write_keyword(" GLOBAL")?,
            Some(false) => ctx.write_keyword(" LOCAL")?,
            None => {}
        }
        if self.add_columnar_replica_on_demand {
            ctx.write_keyword(" ADD_COLUMNAR_REPLICA_ON_DEMAND")?;
        }
        if let Some(attribute) = &self.secondary_engine_attribute {
            ctx.write_keyword(" SECONDARY_ENGINE_ATTRIBUTE = ")?;
            ctx.write_string(attribute)?;
        }
        Ok(())
    }
}

fn write_opt_name(ctx: &mut RestoreCtx<'_>, name: Option<&String>) -> RestoreResult {
    if let Some(name) = name {
        ctx.write_name(name)?;
    }
    Ok(())
}

impl Restore for Constraint {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        match &self.kind {
            ConstraintKind::PrimaryKey => {
                if let Some(name) = &self.name {
                    ctx.write_keyword("CONSTRAINT ")?;
                    ctx.write_name(name)?;
                    ctx.write_plain(" ")?;
                }
                ctx.write_keyword("PRIMARY KEY")?;
            }
            ConstraintKind::Unique => {
                ctx.write_keyword("UNIQUE KEY ")?;
                write_opt_name(ctx, self.name.as_ref())?;
            }
            ConstraintKind::Index => {
                ctx.write_keyword("INDEX ")?;
                ctx.write_keyword(if_not_exists)?;
                write_opt_name(ctx, self.name.as_ref())?;
            }
            ConstraintKind::Fulltext | ConstraintKind::Spatial => {
                let kind = if matches!(self.kind, ConstraintKind::Fulltext) {
                    "FULLTEXT INDEX "
                } else {
                    "SPATIAL INDEX "
                };
                ctx.write_keyword(kind)?;
                write_opt_name(ctx, self.name.as_ref())?;
            }
            ConstraintKind::Vector | ConstraintKind::Columnar => {
                let kind = if matches!(self.kind, ConstraintKind::Vector) {
                    "VECTOR INDEX "
                } else {
                    "COLUMNAR INDEX "
                };
                ctx.write_keyword(kind)?;
                ctx.write_keyword(if_not_exists)?;
                write_opt_name(ctx, self.name.as_ref())?;
            }
            ConstraintKind::ForeignKey(reference) => {
                if let Some(name) = &self.name {
                    ctx.write_keyword("CONSTRAINT ")?;
                    ctx.write_name(name)?;
                    ctx.write_plain(" ")?;
                }
                ctx.write_keyword("FOREIGN KEY ")?;
                ctx.write_keyword(if_not_exists)?;
                write_index_parts(ctx, &self.parts)?;
                ctx.write_plain(" ")?;
                return reference.restore(ctx);
            }
            ConstraintKind::Check { expr, enforced } => {
                if let Some(name) = &self.name {
                    ctx.write_keyword("CONSTRAINT ")?;
                    ctx.write_name(name)?;
                    ctx.write_plain(" ")?;
                }
                return write_check(ctx, expr, *enforced);
            }
        }
        write_index_parts(ctx, &self.parts)?;
        self.options.restore(ctx)
    }
}

fn write_opt_default_u64(ctx: &mut RestoreCtx<'_>, value: Option<u64>) -> RestoreResult {
    match value {
        Some(value) => ctx.write_display(value),
        None => ctx.write_keyword("DEFAULT"),
    }
}

fn write_opt_default_string(ctx: &mut RestoreCtx<'_>, value: Option<&String>) -> RestoreResult {
    match value {
        Some(value) => ctx.write_string(value),
        None => ctx.write_keyword("DEFAULT"),
    }
}

impl Restore for TableOption {
    #[allow(clippy::too_many_lines)]
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let (name, value): (&str, Option<u64>) = match self {
            Self::AutoIncrement(n) => ("AUTO_INCREMENT", Some(*n)),
            Self::AutoIdCache(n) => ("AUTO_ID_CACHE", Some(*n)),
            Self::AutoRandomBase(n) => ("AUTO_RANDOM_BASE", Some(*n)),
            Self::AvgRowLength(n) => ("AVG_ROW_LENGTH", Some(*n)),
            Self::Checksum(n) => ("CHECKSUM", Some(*n)),
            Self::TableChecksum(n) => ("TABLE_CHECKSUM", Some(*n)),
            Self::KeyBlockSize(n) => ("KEY_BLOCK_SIZE", Some(*n)),
            Self::MaxRows(n) => ("MAX_ROWS", Some(*n)),
            Self::MinRows(n) => ("MIN_ROWS", Some(*n)),
            Self::DelayKeyWrite(n) => ("DELAY_KEY_WRITE", Some(*n)),
            Self::ShardRowIdBits(n) => ("SHARD_ROW_ID_BITS", Some(*n)),
            Self::PreSplitRegions(n) => ("PRE_SPLIT_REGIONS", Some(*n)),
            Self::Nodegroup(n) => ("NODEGROUP", Some(*n)),
            _ => ("", None),
        };
        if let Some(value) = value {
            ctx.write_keyword(name)?;
            return ctx.write_display(format_args!(" = {value}"));
        }
        match self {
            Self::Engine(engine) => {
                ctx.write_keyword("ENGINE = ")?;
                ctx.write_name(engine)
            }
            Self::Charset(charset) => {
                ctx.write_keyword("DEFAULT CHARACTER SET = ")?;
                ctx.write_keyword(charset)
            }
            Self::Collate(collate) => {
                ctx.write_keyword("DEFAULT COLLATE = ")?;
                ctx.write_plain(collate)
            }
            Self::Comment(value) => write_string_option(ctx, "COMMENT", value),
            Self::Compression(value) => write_string_option(ctx, "COMPRESSION", value),
            Self::Connection(value) => write_string_option(ctx, "CONNECTION", value),
            Self::Password(value) => write_string_option(ctx, "PASSWORD", value),
            Self::DataDirectory(value) => write_string_option(ctx, "DATA DIRECTORY", value),
            Self::IndexDirectory(value) => write_string_option(ctx, "INDEX DIRECTORY", value),
            Self::Encryption(value) => write_string_option(ctx, "ENCRYPTION", value),
            Self::StorageMedia(value) => write_string_option(ctx, "STORAGE_MEDIA", value),
            Self::SecondaryEngineAttribute(value) => {
                write_string_option(ctx, "SECONDARY_ENGINE_ATTRIBUTE", value)
            }
            Self::EngineAttribute(value) => write_string_option(ctx, "ENGINE_ATTRIBUTE", value),
            Self::TtlJobInterval(value) => write_string_option(ctx, "TTL_JOB_INTERVAL", value),
            Self::RowFormat(format) => {
                ctx.write_keyword("ROW_FORMAT = ")?;
                ctx.write_keyword(format.as_str())
            }
            Self::StatsPersistent(value) => {
                ctx.write_keyword("STATS_PERSISTENT = ")?;
                write_opt_default_u64(ctx, *value)
            }
            Self::StatsAutoRecalc(value) => {
                ctx.write_keyword("STATS_AUTO_RECALC = ")?;
                write_opt_default_u64(ctx, *value)
            }
            Self::StatsSamplePages(value) => {
                ctx.write_keyword("STATS_SAMPLE_PAGES = ")?;
                write_opt_default_u64(ctx, *value)
            }
            Self::PackKeys(value) => {
                ctx.write_keyword("PACK_KEYS = ")?;
                write_opt_default_u64(ctx, *value)
            }
            Self::StatsBuckets(value) => {
                ctx.write_keyword("STATS_BUCKETS = ")?;
                write_opt_default_u64(ctx, *value)
            }
            Self::StatsTopN(value) => {
                ctx.write_keyword("STATS_TOPN = ")?;
                write_opt_default_u64(ctx, *value)
            }
            Self::StatsColsChoice(value) => {
                ctx.write_keyword("STATS_COL_CHOICE = ")?;
                write_opt_default_string(ctx, value.as_ref())
            }
            Self::StatsColList(value) => {
                ctx.write_keyword("STATS_COL_LIST = ")?;
                write_opt_default_string(ctx, value.as_ref())
            }
            Self::StatsSampleRate(value) => {
                ctx.write_keyword("STATS_SAMPLE_RATE = ")?;
                match value {
                    Some(rate) => ctx.write_plain(rate),
                    None => ctx.write_keyword("DEFAULT"),
                }
            }
            Self::AutoextendSize(size) => {
                ctx.write_keyword("AUTOEXTEND_SIZE = ")?;
                ctx.write_plain(size)
            }
            Self::Tablespace(name) => {
                ctx.write_keyword("TABLESPACE = ")?;
                ctx.write_name(name)
            }
            Self::InsertMethod(method) => {
                ctx.write_keyword("INSERT_METHOD = ")?;
                ctx.write_keyword(method)
            }
            Self::SecondaryEngine(engine) => {
                ctx.write_keyword("SECONDARY_ENGINE = ")?;
                match engine {
                    Some(engine) => ctx.write_name(engine),
                    None => ctx.write_keyword("NULL"),
                }
            }
            Self::Union(tables) => {
                ctx.write_keyword("UNION = ")?;
                ctx.write_plain("(")?;
                ctx.write_table_names(tables)?;
                ctx.write_plain(")")
            }
            Self::PlacementPolicy(policy) => {
                ctx.write_keyword("PLACEMENT POLICY = ")?;
                match policy {
                    Some(policy) => ctx.write_name(policy),
                    None => ctx.write_keyword("DEFAULT"),
                }
            }
            Self::Ttl {
                column,
                interval,
                unit,
            } => {
                ctx.write_keyword("TTL = ")?;
                column.restore(ctx)?;
                ctx.write_plain(" + ")?;
                ctx.write_keyword("INTERVAL ")?;
                interval.restore(ctx)?;
                ctx.write_plain(" ")?;
                ctx.write_keyword(unit.as_str())
            }
            Self::TtlEnable(enabled) => {
                ctx.write_keyword("TTL_ENABLE = ")?;
                ctx.write_string(if *enabled { "ON" } else { "OFF" })
            }
            _ => Err(RestoreError::Malformed(format!(
                "table option without a value: {self:?}"
            ))),
        }
    }
}

fn write_string_option(ctx: &mut RestoreCtx<'_>, name: &str, value: &str) -> RestoreResult {
    ctx.write_keyword(name)?;
    ctx.write_plain(" = ")?;
    ctx.write_string(value)
}

pub(super) fn write_table_options(
    ctx: &mut RestoreCtx<'_>,
    options: &[TableOption],
) -> RestoreResult {
    ctx.write_list(options, " ")
}

impl Restore for PartitionMethod {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        if self.linear {
            ctx.write_keyword("LINEAR ")?;
        }
        ctx.write_keyword(self.kind.as_str())?;
        if let Some(algorithm) = self.key_algorithm {
            ctx.write_keyword(" ALGORITHM")?;
            ctx.write_display(format_args!(" = {algorithm}"))?;
        }
        if self.columns_form {
            ctx.write_keyword(" COLUMNS")?;
        }
        if let Some(expr) = &self.expr {
            ctx.write_plain(" (")?;
            expr.restore(ctx)?;
            ctx.write_plain(")")?;
        } else if self.system_time.is_none() {
            ctx.write_plain("(")?;
            ctx.write_list(&self.columns, ", ")?;
            ctx.write_plain(")")?;
        }
        if let Some(system_time) = &self.system_time {
            if let Some((value, unit)) = &system_time.interval {
                ctx.write_keyword(" INTERVAL ")?;
                value.restore(ctx)?;
                ctx.write_plain(" ")?;
                ctx.write_keyword(unit.as_str())?;
            }
            if let Some(limit) = system_time.limit {
                ctx.write_keyword(" LIMIT ")?;
                ctx.write_display(limit)?;
            }
        }
        if let Some(interval) = &self.interval {
            interval.restore(ctx)?;
        }
        Ok(())
    }
}

fn write_range_end(ctx: &mut RestoreCtx<'_>, which: &str, expr: &Expr) -> RestoreResult {
    ctx.write_keyword(which)?;
    ctx.write_keyword(" PARTITION LESS THAN ")?;
    ctx.write_plain("(")?;
    expr.restore(ctx)?;
    ctx.write_plain(")")
}

impl Restore for IntervalPartition {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(" INTERVAL ")?;
        ctx.write_plain("(")?;
        self.interval.restore(ctx)?;
        if let Some(unit) = self.unit {
            ctx.write_plain(" ")?;
            ctx.write_keyword(unit.as_str())?;
        }
        ctx.write_plain(")")?;
        match (&self.first, &self.last) {
            (Some(first), Some(last)) => {
                ctx.write_plain(" ")?;
                write_range_end(ctx, "FIRST", first)?;
                ctx.write_plain(" ")?;
                write_range_end(ctx, "LAST", last)?;
            }
            (None, None) => {}
            _ => {
                return Err(RestoreError::Malformed(
                    "interval partitioning needs both FIRST and LAST bounds".to_string(),
                ))
            }
        }
        if self.null_partition {
            ctx.write_keyword(" NULL PARTITION")?;
        }
        if self.maxvalue_partition {
            ctx.write_keyword(" MAXVALUE PARTITION")?;
        }
        Ok(())
    }
}

impl Restore for PartitionOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Engine(engine) => {
                ctx.write_keyword("ENGINE = ")?;
                ctx.write_name(engine)
            }
            Self::Comment(value) => write_string_option(ctx, "COMMENT", value),
            Self::DataDirectory(value) => write_string_option(ctx, "DATA DIRECTORY", value),
            Self::IndexDirectory(value) => write_string_option(ctx, "INDEX DIRECTORY", value),
            Self::MaxRows(n) => {
                ctx.write_keyword("MAX_ROWS")?;
                ctx.write_display(format_args!(" = {n}"))
            }
            Self::MinRows(n) => {
                ctx.write_keyword("MIN_ROWS")?;
                ctx.write_display(format_args!(" = {n}"))
            }
            Self::Tablespace(name) => {
                ctx.write_keyword("TABLESPACE = ")?;
                ctx.write_name(name)
            }
            Self::Nodegroup(n) => {
                ctx.write_keyword("NODEGROUP")?;
                ctx.write_display(format_args!(" = {n}"))
            }
            Self::PlacementPolicy(policy) => {
                ctx.write_keyword("PLACEMENT POLICY = ")?;
                ctx.write_name(policy)
            }
            Self::Attributes(value) => write_string_option(ctx, "ATTRIBUTES", value),
            Self::SecondaryEngineAttribute(value) => {
                write_string_option(ctx, "SECONDARY_ENGINE_ATTRIBUTE", value)
            }
        }
    }
}

fn write_partition_options(ctx: &mut RestoreCtx<'_>, options: &[PartitionOption]) -> RestoreResult {
    for option in options {
        ctx.write_plain(" ")?;
        option.restore(ctx)?;
    }
    Ok(())
}

impl Restore for SubPartitionDef {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("SUBPARTITION ")?;
        ctx.write_name(&self.name)?;
        write_partition_options(ctx, &self.options)
    }
}

impl Restore for PartitionDef {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("PARTITION ")?;
        ctx.write_name(&self.name)?;
        match &self.values {
            PartitionValues::None => {}
            PartitionValues::LessThan(values) => {
                ctx.write_keyword(" VALUES LESS THAN ")?;
                ctx.write_plain("(")?;
                ctx.write_list(values, ",")?;
                ctx.write_plain(")")?;
            }
            PartitionValues::In { values, default } => {
                ctx.write_keyword(" VALUES IN ")?;
                ctx.write_plain("(")?;
                ctx.write_list(values, ",")?;
                if *default {
                    if !values.is_empty() {
                        ctx.write_plain(",")?;
                    }
                    ctx.write_keyword("DEFAULT")?;
                }
                ctx.write_plain(")")?;
            }
            PartitionValues::History => ctx.write_keyword(" HISTORY")?,
            PartitionValues::Current => ctx.write_keyword(" CURRENT")?,
        }
        write_partition_options(ctx, &self.options)?;
        if !self.subs.is_empty() {
            ctx.write_plain(" (")?;
            ctx.write_list(&self.subs, ",")?;
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

fn write_partition_defs(ctx: &mut RestoreCtx<'_>, defs: &[PartitionDef]) -> RestoreResult {
    ctx.write_plain("(")?;
    ctx.write_list(defs, ",")?;
    ctx.write_plain(")")
}

impl Restore for PartitionOptions {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("PARTITION BY ")?;
        self.method.restore(ctx)?;
        if let Some(count) = self.method.count {
            ctx.write_keyword(" PARTITIONS ")?;
            ctx.write_display(count)?;
        }
        if let Some(sub) = &self.sub {
            ctx.write_keyword(" SUBPARTITION BY ")?;
            sub.restore(ctx)?;
            if let Some(count) = sub.count {
                ctx.write_keyword(" SUBPARTITIONS ")?;
                ctx.write_display(count)?;
            }
        }
        if !self.defs.is_empty() {
            ctx.write_plain(" ")?;
            write_partition_defs(ctx, &self.defs)?;
        }
        Ok(())
    }
}

impl Restore for CreateTable {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(match self.temporary {
            TemporaryKind::None => "CREATE TABLE ",
            TemporaryKind::Local => "CREATE TEMPORARY TABLE ",
            TemporaryKind::Global => "CREATE GLOBAL TEMPORARY TABLE ",
        })?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        ctx.write_table_name(&self.table)?;
        if let Some(like) = &self.like {
            ctx.write_keyword(" LIKE ")?;
            return ctx.write_table_name(like);
        }
        if !self.columns.is_empty() || !self.constraints.is_empty() {
            ctx.write_plain(" (")?;
            ctx.write_list(&self.columns, ",")?;
            if !self.columns.is_empty() && !self.constraints.is_empty() {
                ctx.write_plain(",")?;
            }
            ctx.write_list(&self.constraints, ",")?;
            ctx.write_plain(")")?;
        }
        if !self.options.is_empty() {
            ctx.write_plain(" ")?;
            write_table_options(ctx, &self.options)?;
        }
        if let Some(partition) = &self.partition {
            ctx.write_plain(" ")?;
            partition.restore(ctx)?;
        }
        match self.duplicate {
            CreateDuplicate::Error => {}
            CreateDuplicate::Ignore => ctx.write_keyword(" IGNORE")?,
            CreateDuplicate::Replace => ctx.write_keyword(" REPLACE")?,
        }
        if let Some(query) = &self.query {
            ctx.write_keyword(" AS ")?;
            query.restore(ctx)?;
        }
        match self.on_commit_delete_rows {
            Some(true) => ctx.write_keyword(" ON COMMIT DELETE ROWS"),
            Some(false) => ctx.write_keyword(" ON COMMIT PRESERVE ROWS"),
            None => Ok(()),
        }
    }
}

pub(super) fn write_if_exists(ctx: &mut RestoreCtx<'_>, if_exists: bool) -> RestoreResult {
    if if_exists {
        ctx.write_keyword("IF EXISTS ")?;
    }
    Ok(())
}

fn write_opt_string_or_default(
    ctx: &mut RestoreCtx<'_>,
    value: Option<&String>,
    as_name: bool,
) -> RestoreResult {
    match value {
        Some(value) if as_name => ctx.write_name(value),
        Some(value) => ctx.write_string(value),
        None => ctx.write_keyword("DEFAULT"),
    }
}

impl Restore for AlterTableSpec {
    #[allow(clippy::too_many_lines)]
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Options(options) => write_table_options(ctx, options),
            Self::AddColumns {
                if_not_exists,
                columns,
                parenthesized,
                position,
            } => {
                ctx.write_keyword("ADD COLUMN ")?;
                if *if_not_exists {
                    ctx.write_keyword("IF NOT EXISTS ")?;
                }
                if *parenthesized {
                    ctx.write_plain("(")?;
                    ctx.write_list(columns, ", ")?;
                    return ctx.write_plain(")");
                }
                let [column] = columns.as_slice() else {
                    return Err(RestoreError::Malformed(
                        "ADD COLUMN without parentheses takes exactly one column".to_string(),
                    ));
                };
                column.restore(ctx)?;
                position.restore(ctx)
            }
            Self::AddConstraint(constraint) => {
                ctx.write_keyword("ADD ")?;
                constraint.restore(ctx)
            }
            Self::DropColumn { if_exists, name } => {
                ctx.write_keyword("DROP COLUMN ")?;
                write_if_exists(ctx, *if_exists)?;
                name.restore(ctx)
            }
            Self::DropPrimaryKey => ctx.write_keyword("DROP PRIMARY KEY"),
            Self::DropIndex { if_exists, name } => {
                ctx.write_keyword("DROP INDEX ")?;
                write_if_exists(ctx, *if_exists)?;
                ctx.write_name(name)
            }
            Self::DropForeignKey { if_exists, name } => {
                ctx.write_keyword("DROP FOREIGN KEY ")?;
                write_if_exists(ctx, *if_exists)?;
                ctx.write_name(name)
            }
            Self::DropCheck(name) => {
                ctx.write_keyword("DROP CHECK ")?;
                ctx.write_name(name)
            }
            Self::ModifyColumn {
                if_exists,
                column,
                position,
            } => {
                ctx.write_keyword("MODIFY COLUMN ")?;
                write_if_exists(ctx, *if_exists)?;
                column.restore(ctx)?;
                position.restore(ctx)
            }
            Self::ChangeColumn {
                if_exists,
                old,
                column,
                position,
            } => {
                ctx.write_keyword("CHANGE COLUMN ")?;
                write_if_exists(ctx, *if_exists)?;
                old.restore(ctx)?;
                ctx.write_plain(" ")?;
                column.restore(ctx)?;
                position.restore(ctx)
            }
            Self::RenameColumn { old, new } => {
                ctx.write_keyword("RENAME COLUMN ")?;
                old.restore(ctx)?;
                ctx.write_keyword(" TO ")?;
                new.restore(ctx)
            }
            Self::RenameTable(table) => {
                ctx.write_keyword("RENAME AS ")?;
                ctx.write_table_name(table)
            }
            Self::RenameIndex { old, new } => {
                ctx.write_keyword("RENAME INDEX ")?;
                ctx.write_name(old)?;
                ctx.write_keyword(" TO ")?;
                ctx.write_name(new)
            }
            Self::AlterColumnDefault { name, default } => {
                ctx.write_keyword("ALTER COLUMN ")?;
                name.restore(ctx)?;
                match default {
                    Some(default) => {
                        ctx.write_keyword(" SET DEFAULT ")?;
                        default.restore(ctx)
                    }
                    None => ctx.write_keyword(" DROP DEFAULT"),
                }
            }
            Self::AlterIndexVisibility { name, visible } => {
                ctx.write_keyword("ALTER INDEX ")?;
                ctx.write_name(name)?;
                ctx.write_keyword(if *visible { " VISIBLE" } else { " INVISIBLE" })
            }
            Self::AlterCheck { name, enforced } => {
                ctx.write_keyword("ALTER CHECK ")?;
                ctx.write_name(name)?;
                ctx.write_keyword(if *enforced { " ENFORCED" } else { " NOT ENFORCED" })
            }
            Self::Lock(lock) => {
                ctx.write_keyword("LOCK = ")?;
                ctx.write_keyword(lock.as_str())
            }
            Self::Algorithm(algorithm) => {
                ctx.write_keyword("ALGORITHM = ")?;
                ctx.write_keyword(algorithm.as_str())
            }
            Self::Force => ctx.write_keyword("FORCE"),
            Self::ConvertToCharset { charset, collate } => {
                ctx.write_keyword("CONVERT TO CHARACTER SET ")?;
                ctx.write_keyword(charset.as_deref().unwrap_or("DEFAULT"))?;
                if let Some(collate) = collate {
                    ctx.write_keyword(" COLLATE ")?;
                    ctx.write_plain(collate)?;
                }
                Ok(())
            }
            Self::Tablespace(import) => ctx.write_keyword(if *import {
                "IMPORT TABLESPACE"
            } else {
                "DISCARD TABLESPACE"
            }),
            Self::Keys(enable) => {
                ctx.write_keyword(if *enable { "ENABLE KEYS" } else { "DISABLE KEYS" })
            }
            Self::OrderBy(items) => {
                ctx.write_keyword("ORDER BY ")?;
                ctx.write_list(items, ",")
            }
            Self::Validation(with) => ctx.write_keyword(if *with {
                "WITH VALIDATION"
            } else {
                "WITHOUT VALIDATION"
            }),
            Self::Cache(cache) => ctx.write_keyword(if *cache { "CACHE" } else { "NOCACHE" }),
            Self::ReadOnly(read_only) => {
                ctx.write_keyword(if *read_only { "READ ONLY" } else { "READ WRITE" })
            }
            Self::TiflashReplica { count, labels } => {
                ctx.write_keyword("SET TIFLASH REPLICA ")?;
                ctx.write_display(count)?;
                if !labels.is_empty() {
                    ctx.write_keyword(" LOCATION LABELS ")?;
                    for (i, label) in labels.iter().enumerate() {
                        if i > 0 {
                            ctx.write_plain(", ")?;
                        }
                        ctx.write_string(label)?;
                    }
                }
                Ok(())
            }
            Self::Compact {
                partitions,
                tiflash,
            } => {
                ctx.write_keyword("COMPACT")?;
                if !partitions.is_empty() {
                    ctx.write_keyword(" PARTITION ")?;
                    ctx.write_name_list(partitions)?;
                }
                if *tiflash {
                    ctx.write_keyword(" TIFLASH REPLICA")?;
                }
                Ok(())
            }
            Self::Attributes(attributes) => {
                ctx.write_keyword("ATTRIBUTES = ")?;
                write_opt_string_or_default(ctx, attributes.as_ref(), false)
            }
            Self::PartitionAttributes { name, attributes } => {
                ctx.write_keyword("PARTITION ")?;
                ctx.write_name(name)?;
                ctx.write_keyword(" ATTRIBUTES = ")?;
                write_opt_string_or_default(ctx, attributes.as_ref(), false)
            }
            Self::PartitionPlacement { name, policy } => {
                ctx.write_keyword("PARTITION ")?;
                ctx.write_name(name)?;
                ctx.write_keyword(" PLACEMENT POLICY = ")?;
                write_opt_string_or_default(ctx, policy.as_ref(), true)
            }
            Self::RemoveTtl => ctx.write_keyword("REMOVE TTL"),
            Self::RemovePartitioning => ctx.write_keyword("REMOVE PARTITIONING"),
            Self::AddPartitions {
                if_not_exists,
                defs,
                count,
            } => {
                ctx.write_keyword("ADD PARTITION ")?;
                if *if_not_exists {
                    ctx.write_keyword("IF NOT EXISTS ")?;
                }
                match count {
                    Some(count) => {
                        ctx.write_keyword("PARTITIONS ")?;
                        ctx.write_display(count)
                    }
                    None => write_partition_defs(ctx, defs),
                }
            }
            Self::DropPartition { if_exists, names } => {
                ctx.write_keyword("DROP PARTITION ")?;
                write_if_exists(ctx, *if_exists)?;
                ctx.write_name_list(names)
            }
            Self::CoalescePartition(count) => {
                ctx.write_keyword("COALESCE PARTITION ")?;
                ctx.write_display(count)
            }
            Self::ReorganizePartition { names, defs } => {
                ctx.write_keyword("REORGANIZE PARTITION")?;
                if !names.is_empty() {
                    ctx.write_plain(" ")?;
                    ctx.write_name_list(names)?;
                    ctx.write_keyword(" INTO ")?;
                    write_partition_defs(ctx, defs)?;
                }
                Ok(())
            }
            Self::ExchangePartition {
                name,
                table,
                validation,
            } => {
                ctx.write_keyword("EXCHANGE PARTITION ")?;
                ctx.write_name(name)?;
                ctx.write_keyword(" WITH TABLE ")?;
                ctx.write_table_name(table)?;
                match validation {
                    Some(true) => ctx.write_keyword(" WITH VALIDATION"),
                    Some(false) => ctx.write_keyword(" WITHOUT VALIDATION"),
                    None => Ok(()),
                }
            }
            Self::Partitions { op, selection } => {
                ctx.write_keyword(op.as_str())?;
                ctx.write_keyword(" PARTITION ")?;
                match selection {
                    PartitionSelection::All => ctx.write_keyword("ALL")?,
                    PartitionSelection::Names(names) => ctx.write_name_list(names)?,
                }
                if matches!(op, PartitionMaintenance::Discard | PartitionMaintenance::Import) {
                    ctx.write_keyword(" TABLESPACE")?;
                }
                Ok(())
            }
            Self::FirstPartition(expr) => write_range_end(ctx, "FIRST", expr),
            Self::LastPartition(expr) => write_range_end(ctx, "LAST", expr),
            Self::MergeFirstPartition(expr) => {
                ctx.write_keyword("MERGE ")?;
                write_range_end(ctx, "FIRST", expr)
            }
            Self::SplitMaxvaluePartition(expr) => {
                ctx.write_keyword("SPLIT ")?;
                write_range_end(ctx, "MAXVALUE", expr)
            }
        }
    }
}

impl Restore for AlterTable {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("ALTER TABLE ")?;
        ctx.write_table_name(&self.table)?;
        if !self.specs.is_empty() {
            ctx.write_plain(" ")?;
            ctx.write_list(&self.specs, ", ")?;
        }
        if let Some(partition) = &self.partition {
            ctx.write_plain(" ")?;
            partition.restore(ctx)?;
        }
        Ok(())
    }
}

impl Restore for CreateIndex {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("CREATE ")?;
        if let Some(kind) = self.kind.as_str() {
            ctx.write_keyword(kind)?;
            ctx.write_plain(" ")?;
        }
        ctx.write_keyword("INDEX ")?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        ctx.write_name(&self.name)?;
        ctx.write_keyword(" ON ")?;
        ctx.write_table_name(&self.table)?;
        ctx.write_plain(" ")?;
        write_index_parts(ctx, &self.parts)?;
        self.options.restore(ctx)?;
        if let Some(algorithm) = self.algorithm {
            ctx.write_keyword(" ALGORITHM = ")?;
            ctx.write_keyword(algorithm.as_str())?;
        }
        if let Some(lock) = self.lock {
            ctx.write_keyword(" LOCK = ")?;
            ctx.write_keyword(lock.as_str())?;
        }
        Ok(())
    }
}

impl Restore for DropIndex {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("DROP INDEX ")?;
        write_if_exists(ctx, self.if_exists)?;
        ctx.write_name(&self.name)?;
        ctx.write_keyword(" ON ")?;
        ctx.write_table_name(&self.table)
    }
}

impl Restore for CreateView {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("CREATE ")?;
        if self.or_replace {
            ctx.write_keyword("OR REPLACE ")?;
        }
        if let Some(algorithm) = self.algorithm {
            ctx.write_keyword("ALGORITHM = ")?;
            ctx.write_keyword(algorithm.as_str())?;
            ctx.write_plain(" ")?;
        }
        if let Some(definer) = &self.definer {
            ctx.write_keyword("DEFINER = ")?;
            definer.restore(ctx)?;
            ctx.write_plain(" ")?;
        }
        match self.security_definer {
            Some(true) => ctx.write_keyword("SQL SECURITY DEFINER ")?,
            Some(false) => ctx.write_keyword("SQL SECURITY INVOKER ")?,
            None => {}
        }
        ctx.write_keyword("VIEW ")?;
        ctx.write_table_name(&self.name)?;
        if !self.columns.is_empty() {
            ctx.write_plain(" (")?;
            ctx.write_name_list(&self.columns)?;
            ctx.write_plain(")")?;
        }
        ctx.write_keyword(" AS ")?;
        self.query.restore(ctx)?;
        match self.check_option {
            Some(ViewCheckOption::Cascaded) => ctx.write_keyword(" WITH CASCADED CHECK OPTION"),
            Some(ViewCheckOption::Local) => ctx.write_keyword(" WITH LOCAL CHECK OPTION"),
            None => Ok(()),
        }
    }
}

impl Restore for DatabaseOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Charset(charset) => {
                ctx.write_keyword("CHARACTER SET = ")?;
                ctx.write_keyword(charset)
            }
            Self::Collate(collate) => {
                ctx.write_keyword("COLLATE = ")?;
                ctx.write_plain(collate)
            }
            Self::Encryption(value) => write_string_option(ctx, "ENCRYPTION", value),
            Self::PlacementPolicy(policy) => {
                ctx.write_keyword("PLACEMENT POLICY = ")?;
                write_opt_string_or_default(ctx, policy.as_ref(), true)
            }
            Self::TiflashReplica(count) => {
                ctx.write_keyword("SET TIFLASH REPLICA ")?;
                ctx.write_display(count)
            }
        }
    }
}

fn write_database_options(ctx: &mut RestoreCtx<'_>, options: &[DatabaseOption]) -> RestoreResult {
    for option in options {
        ctx.write_plain(" ")?;
        option.restore(ctx)?;
    }
    Ok(())
}

impl Restore for CreateDatabase {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("CREATE DATABASE ")?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        ctx.write_name(&self.name)?;
        write_database_options(ctx, &self.options)
    }
}

impl Restore for AlterDatabase {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("ALTER DATABASE")?;
        if let Some(name) = &self.name {
            ctx.write_plain(" ")?;
            ctx.write_name(name)?;
        }
        write_database_options(ctx, &self.options)
    }
}

impl Restore for DropDatabase {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("DROP DATABASE ")?;
        write_if_exists(ctx, self.if_exists)?;
        ctx.write_name(&self.name)
    }
}

impl Restore for DropTable {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("DROP ")?;
        match self.temporary {
            TemporaryKind::None => {}
            TemporaryKind::Local => ctx.write_keyword("TEMPORARY ")?,
            TemporaryKind::Global => ctx.write_keyword("GLOBAL TEMPORARY ")?,
        }
        ctx.write_keyword(if self.view { "VIEW " } else { "TABLE " })?;
        write_if_exists(ctx, self.if_exists)?;
        ctx.write_table_names(&self.tables)?;
        match self.cascade {
            Some(true) => ctx.write_keyword(" CASCADE"),
            Some(false) => ctx.write_keyword(" RESTRICT"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{DataType, TypeKind};
    use crate::restore::{restore, RestoreFlags};
    use crate::Parser;

    fn round_trip(sql: &str) -> String {
        let parser = Parser::new();
        let stmt = parser.parse_one_stmt(sql, "", "").unwrap().stmt;
        let restored = restore(&stmt, RestoreFlags::DEFAULT).unwrap();
        let again = parser.parse_one_stmt(&restored, "", "").unwrap().stmt;
        assert_eq!(again, stmt, "{restored}");
        restored
    }

    #[test]
    fn test_create_table_columns() {
        assert_eq!(
            round_trip(
                "create table if not exists t (id bigint unsigned not null auto_increment primary key, \
                 name varchar(32) character set utf8mb4 collate utf8mb4_bin default 'x' comment 'n')"
            ),
            "CREATE TABLE IF NOT EXISTS `t` (`id` BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,\
             `name` VARCHAR(32) CHARACTER SET UTF8MB4 COLLATE utf8mb4_bin DEFAULT 'x' COMMENT 'n')"
        );
        round_trip("create table t (a int, b int as (a + 1) stored, c enum('x','y') default 'x')");
        round_trip("create table t (a serial, b decimal(10,2) zerofill, c timestamp(3) on update current_timestamp(3))");
        round_trip("create table t (a int key clustered auto_random(5, 54))");
    }

    #[test]
    fn test_create_table_constraints() {
        assert_eq!(
            round_trip(
                "create table t (a int, b int, primary key (a), unique key ub (b desc), \
                 constraint fk foreign key (b) references u (x) on delete cascade, \
                 constraint ck check (a > 0) not enforced)"
            ),
            "CREATE TABLE `t` (`a` INT,`b` INT,PRIMARY KEY(`a`),UNIQUE KEY `ub`(`b` DESC),\
             CONSTRAINT `fk` FOREIGN KEY (`b`) REFERENCES `u`(`x`) ON DELETE CASCADE,\
             CONSTRAINT `ck` CHECK(`a`>0) NOT ENFORCED)"
        );
        round_trip("create table t (a text, fulltext key ft (a) with parser ngram, index ((lower(a))) invisible comment 'c')");
    }

    #[test]
    fn test_table_options() {
        assert_eq!(
            round_trip("create table t (a int) engine=InnoDB default charset=utf8mb4 auto_increment=5 comment='c'"),
            "CREATE TABLE `t` (`a` INT) ENGINE = `InnoDB` DEFAULT CHARACTER SET = UTF8MB4 AUTO_INCREMENT = 5 COMMENT = 'c'"
        );
        round_trip("create table t (a int) row_format=compact stats_persistent=default shard_row_id_bits=4 pre_split_regions=2");
        round_trip("create table t (a datetime) ttl = a + interval 1 day ttl_enable = 'OFF' ttl_job_interval = '1h'");
        round_trip("create table t (a int) placement policy = p1 union = (t1, t2)");
    }

    #[test]
    fn test_create_table_other_forms() {
        assert_eq!(round_trip("create table t like u"), "CREATE TABLE `t` LIKE `u`");
        assert_eq!(
            round_trip("create table t ignore as select a from u"),
            "CREATE TABLE `t` IGNORE AS SELECT `a` FROM `u`"
        );
        round_trip("create global temporary table t (a int) on commit delete rows");
        round_trip("create temporary table t (a int)");
    }

    #[test]
    fn test_partitions() {
        assert_eq!(
            round_trip(
                "create table t (a int) partition by range (a) \
                 (partition p0 values less than (10), partition p1 values less than maxvalue)"
            ),
            "CREATE TABLE `t` (`a` INT) PARTITION BY RANGE (`a`) \
             (PARTITION `p0` VALUES LESS THAN (10),PARTITION `p1` VALUES LESS THAN (MAXVALUE))"
        );
        round_trip("create table t (a int) partition by linear key algorithm = 2 (a) partitions 4");
        round_trip("create table t (a int, b int) partition by list columns (a, b) (partition p values in ((1, 2), (3, 4)) comment = 'x')");
        round_trip("create table t (a int) partition by list (a) (partition p values in (1, default))");
        round_trip(
            "create table t (a int) partition by range (a) subpartition by hash (a) subpartitions 2 \
             (partition p values less than (5) (subpartition s0, subpartition s1))",
        );
        round_trip(
            "create table t (a int) partition by range (a) interval (10) \
             first partition less than (0) last partition less than (100) maxvalue partition",
        );
    }

    #[test]
    fn test_alter_table() {
        assert_eq!(
            round_trip("alter table t add column b int after a, drop index i, modify c bigint first"),
            "ALTER TABLE `t` ADD COLUMN `b` INT AFTER `a`, DROP INDEX `i`, MODIFY COLUMN `c` BIGINT FIRST"
        );
        assert_eq!(
            round_trip("alter table t rename to u"),
            "ALTER TABLE `t` RENAME AS `u`"
        );
        round_trip("alter table t add (x int, y int), add unique key (x), algorithm = inplace, lock = none");
        round_trip("alter table t change column a b int, rename column b to c, rename index i to j");
        round_trip("alter table t alter column a set default 1, alter index i invisible, alter check c not enforced");
        round_trip("alter table t convert to character set utf8mb4 collate utf8mb4_bin");
        round_trip("alter table t set tiflash replica 2 location labels 'a', 'b'");
        round_trip("alter table t engine = InnoDB comment = 'x'");
        round_trip("alter table t partition p attributes = default");
        round_trip("alter table t partition p placement policy = default");
        round_trip("alter table t remove ttl");
    }

    #[test]
    fn test_alter_partitions() {
        round_trip("alter table t add partition (partition p2 values less than (20))");
        round_trip("alter table t add partition partitions 4");
        round_trip("alter table t drop partition if exists p0, p1");
        round_trip("alter table t truncate partition all");
        round_trip("alter table t discard partition p0 tablespace");
        round_trip("alter table t reorganize partition p0 into (partition p1 values less than (5))");
        round_trip("alter table t exchange partition p with table u without validation");
        round_trip("alter table t first partition less than (10)");
        round_trip("alter table t split maxvalue partition less than (100)");
        round_trip("alter table t remove partitioning");
        round_trip("alter table t partition by hash (a) partitions 3");
    }

    #[test]
    fn test_index_view_database() {
        assert_eq!(
            round_trip("create unique index if not exists i on t (a(10), b desc) using btree lock = none"),
            "CREATE UNIQUE INDEX IF NOT EXISTS `i` ON `t` (`a`(10), `b` DESC) USING BTREE LOCK = NONE"
        );
        assert_eq!(round_trip("drop index if exists i on t"), "DROP INDEX IF EXISTS `i` ON `t`");
        assert_eq!(
            round_trip("create or replace algorithm = merge sql security invoker view v (x) as select a from t with check option"),
            "CREATE OR REPLACE ALGORITHM = MERGE SQL SECURITY INVOKER VIEW `v` (`x`) AS SELECT `a` FROM `t` WITH CASCADED CHECK OPTION"
        );
        assert_eq!(
            round_trip("create database if not exists d default character set utf8mb4"),
            "CREATE DATABASE IF NOT EXISTS `d` CHARACTER SET = UTF8MB4"
        );
        round_trip("alter database collate = utf8mb4_bin");
        round_trip("alter schema d set tiflash replica 1");
        assert_eq!(round_trip("drop schema if exists d"), "DROP DATABASE IF EXISTS `d`");
        assert_eq!(
            round_trip("drop temporary table if exists t1, t2 cascade"),
            "DROP TEMPORARY TABLE IF EXISTS `t1`, `t2` CASCADE"
        );
        round_trip("drop view v");
    }

    #[test]
    fn test_strict_double_drops_precision() {
        let ty = DataType {
            length: Some(10),
            ..DataType::new(TypeKind::Double)
        };
        let flags = RestoreFlags::DEFAULT | RestoreFlags::STRICT_DOUBLE_TYPE_CHECK;
        assert_eq!(restore(&ty, flags).unwrap(), "DOUBLE");
        assert_eq!(restore(&ty, RestoreFlags::DEFAULT).unwrap(), "DOUBLE(10)");
    }
}

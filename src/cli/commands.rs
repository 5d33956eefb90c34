//! CLI command implementations.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::{ActivityManager, UserSummary, UserTotal};
use crate::types::{hash_key, ActivityCounts, ActivityError, ActivityKind, ActivityResult};

/// One line of a replay script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    AddUser { user: String },
    AddActivity { user: String, activity: String },
    RemoveActivity { user: String },
    ListActivities { user: String },
    RecentActivity { user: String },
    ActivityCounts { user: String },
    MostFrequent { user: String },
    TopUser,
    ListUsers,
}

/// Result of applying one [`Op`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    UserAdded {
        user: String,
        /// Set when the requested name was taken and a suffixed one was used.
        requested: Option<String>,
    },
    ActivityAdded {
        user: String,
        activity: String,
        counted: Option<ActivityKind>,
    },
    ActivityRemoved {
        user: String,
        removed: Option<String>,
    },
    Activities {
        user: String,
        activities: Vec<String>,
    },
    RecentActivity {
        user: String,
        activity: Option<String>,
    },
    Counts {
        user: String,
        counts: ActivityCounts,
    },
    MostFrequent {
        user: String,
        activity: Option<String>,
    },
    TopUser {
        top: Option<UserTotal>,
    },
    Users {
        users: Vec<UserSummary>,
    },
    UserNotFound {
        user: String,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserAdded {
                user,
                requested: None,
            } => write!(f, "User '{}' has been added", user),
            Self::UserAdded {
                user,
                requested: Some(_),
            } => write!(f, "The user exists. Added with a modified username: {}", user),
            Self::ActivityAdded { user, activity, .. } => {
                write!(f, "Activity '{}' added for user '{}'.", activity, user)
            }
            Self::ActivityRemoved {
                user,
                removed: Some(activity),
            } => write!(f, "Removed oldest activity '{}' from user '{}'", activity, user),
            Self::ActivityRemoved {
                user,
                removed: None,
            } => write!(f, "User '{}' has no activities to remove", user),
            Self::Activities { user, activities } => {
                write!(f, "User: {}'s activities: {}", user, activities.join(", "))
            }
            Self::RecentActivity { activity, .. } => {
                write!(f, "The last activity is '{}'", activity.as_deref().unwrap_or(""))
            }
            Self::Counts { user, counts } => {
                writeln!(f, "User-> {}'s Activity Counts:", user)?;
                writeln!(f, "Likes: {}", counts.likes)?;
                writeln!(f, "Comments: {}", counts.comments)?;
                writeln!(f, "Shares: {}", counts.shares)?;
                write!(f, "Posts: {}", counts.posts)
            }
            Self::MostFrequent { activity, .. } => write!(
                f,
                "Most frequent activity: {}",
                activity.as_deref().unwrap_or("")
            ),
            Self::TopUser { top: Some(top) } => write!(
                f,
                "User with the highest total activities-> {}\n- Total Activities: {}",
                top.identifier, top.total
            ),
            Self::TopUser { top: None } => write!(f, "No users found with activities."),
            Self::Users { users } => {
                for (i, summary) in users.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "->User: {}", summary.identifier)?;
                    write!(f, "-Activities: {}", summary.activities.join(", "))?;
                }
                Ok(())
            }
            Self::UserNotFound { .. } => write!(f, "User doesn't exist."),
        }
    }
}

/// Register `requested`, or `"<requested> N"` with the smallest free N when
/// the name is already taken.
///
/// Returns the name that was registered.
pub fn register_user(manager: &mut ActivityManager, requested: &str) -> String {
    let mut name = requested.to_string();
    let mut counter = 0u32;
    while manager.has_user(&name) {
        counter += 1;
        name = format!("{} {}", requested, counter);
    }
    manager.add_user(&name);
    name
}

/// Apply one operation to the manager.
///
/// Unknown users become [`Outcome::UserNotFound`]; any other error is returned.
pub fn apply(manager: &mut ActivityManager, op: Op) -> ActivityResult<Outcome> {
    let result = match op {
        Op::AddUser { user } => {
            let registered = register_user(manager, &user);
            let requested = (registered != user).then_some(user);
            Ok(Outcome::UserAdded {
                user: registered,
                requested,
            })
        }
        Op::AddActivity { user, activity } => manager
            .add_activity(&user, &activity)
            .map(|counted| Outcome::ActivityAdded {
                user,
                activity,
                counted,
            }),
        Op::RemoveActivity { user } => manager
            .remove_activity(&user)
            .map(|removed| Outcome::ActivityRemoved { user, removed }),
        Op::ListActivities { user } => manager
            .list_activities(&user)
            .map(|activities| Outcome::Activities { user, activities }),
        Op::RecentActivity { user } => manager
            .most_recent_activity(&user)
            .map(|activity| Outcome::RecentActivity { user, activity }),
        Op::ActivityCounts { user } => manager
            .activity_counts(&user)
            .map(|counts| Outcome::Counts { user, counts }),
        Op::MostFrequent { user } => manager
            .most_frequent_activity(&user)
            .map(|activity| Outcome::MostFrequent { user, activity }),
        Op::TopUser => Ok(Outcome::TopUser {
            top: manager.highest_total_activity_user(),
        }),
        Op::ListUsers => Ok(Outcome::Users {
            users: manager.list_all_users(),
        }),
    };

    match result {
        Err(ActivityError::UserNotFound(user)) => Ok(Outcome::UserNotFound { user }),
        other => other,
    }
}

/// Apply every operation in a JSON-lines script, writing one outcome per line.
///
/// Blank lines and lines starting with `#` are skipped. Returns the number of
/// operations applied.
pub fn replay<R: BufRead, W: Write>(
    manager: &mut ActivityManager,
    reader: R,
    out: &mut W,
    json: bool,
) -> ActivityResult<usize> {
    let mut applied = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let op: Op = serde_json::from_str(trimmed).map_err(|source| ActivityError::Script {
            line: idx + 1,
            source,
        })?;
        log::debug!("Applying {:?}", op);

        let outcome = apply(manager, op)?;
        if json {
            writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
        } else {
            writeln!(out, "{}", outcome)?;
        }
        applied += 1;
    }

    Ok(applied)
}

/// Replay a script file (`-` for stdin) against a fresh manager.
pub fn cmd_replay(path: &Path, manager: &mut ActivityManager, json: bool) -> ActivityResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let applied = if path == Path::new("-") {
        replay(manager, io::stdin().lock(), &mut out, json)?
    } else {
        let file = File::open(path)?;
        replay(manager, BufReader::new(file), &mut out, json)?
    };

    if !json {
        writeln!(
            out,
            "Applied {} operations; {} users indexed",
            applied,
            manager.user_count()
        )?;
    }
    Ok(())
}

/// Print the hash key of each identifier.
pub fn cmd_hash<W: Write>(identifiers: &[String], out: &mut W, json: bool) -> ActivityResult<()> {
    if json {
        let keys: Vec<serde_json::Value> = identifiers
            .iter()
            .map(|id| serde_json::json!({"identifier": id, "hash": hash_key(id)}))
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&keys)?)?;
    } else {
        for id in identifiers {
            writeln!(out, "{}\t{}", hash_key(id), id)?;
        }
    }
    Ok(())
}
